use display_ads_store::{config, repo};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("no .env file was loaded: {e}");
    }

    pretty_env_logger::init();

    let database_config = config::DatabaseConfig::from_env()?;
    let db_conn = repo::establish_database_connection(&database_config).await?;
    log::info!("The {} table is initialized with columns: {}", repo::TABLE_NAME, repo::column_names().join(", "));

    db_conn.close().await;
    Ok(())
}
