mod schema;
mod display_ads;

#[cfg(test)]
pub(crate) mod test;

use std::str::FromStr;
use sqlx::{Pool, Sqlite};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
pub use schema::*;
use crate::config::DatabaseConfig;

pub async fn establish_database_connection(config: &DatabaseConfig) -> Result<Pool<Sqlite>, anyhow::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options).await?;
    create_display_ads_table(&pool).await?;
    Ok(pool)
}

/// Does nothing if the table already exists.
pub async fn create_display_ads_table(pool: &Pool<Sqlite>) -> Result<(), anyhow::Error> {
    sqlx::query(CREATE_TABLE.as_str())
        .execute(pool)
        .await?;
    log::debug!("the {TABLE_NAME} table is ready");
    Ok(())
}
