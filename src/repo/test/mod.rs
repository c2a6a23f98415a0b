
use sqlx::{Pool, Sqlite};
use crate::config::DatabaseConfig;
use crate::domain::DisplayAd;
use crate::repo;

const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

pub const CREATIVE_INSTANCE_ID: &str = "abc123";
pub const TAB_ID: i32 = 5;

/// Every connection to `sqlite::memory:` gets its own database, so the pool is limited to one.
pub async fn start_sqlite() -> Pool<Sqlite> {
    let conf = DatabaseConfig::new(IN_MEMORY_DATABASE_URL.to_owned(), 1);
    repo::establish_database_connection(&conf)
        .await.expect("couldn't establish a database connection")
}

pub fn short_form_ad(position: i32) -> DisplayAd {
    DisplayAd::new_for_insert(CREATIVE_INSTANCE_ID, position, TAB_ID, "Buy now", "Shop", "https://example.com", "img.png")
}

pub async fn insert(db: &Pool<Sqlite>, ad: &DisplayAd) {
    let columns = repo::column_names();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!("INSERT INTO {} ({}) VALUES ({placeholders})", repo::TABLE_NAME, columns.join(", "));
    sqlx::query(&sql)
        .bind(ad.uuid())
        .bind(ad.creative_instance_id())
        .bind(ad.position())
        .bind(ad.tab_id())
        .bind(ad.ad_title())
        .bind(ad.ad_description())
        .bind(ad.ad_cta_text())
        .bind(ad.ad_cta_link())
        .bind(ad.ad_image())
        .execute(db)
        .await.expect("couldn't insert a display ad");
}
