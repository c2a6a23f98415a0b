use sqlx::{FromRow, Row};
use sqlx::sqlite::SqliteRow;
use crate::domain::DisplayAd;
use crate::repo::Column;

/// Materializes a record from a row of the display ads table. The surrogate `ID` is skipped.
impl<'r> FromRow<'r, SqliteRow> for DisplayAd {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let mut ad = DisplayAd::default();
        ad.set_uuid(row.try_get(Column::Uuid.name())?);
        ad.set_creative_instance_id(row.try_get::<String, _>(Column::CreativeInstanceId.name())?);
        ad.set_position(row.try_get(Column::Position.name())?);
        ad.set_tab_id(row.try_get(Column::TabId.name())?);
        ad.set_ad_title(row.try_get::<String, _>(Column::AdTitle.name())?);
        ad.set_ad_description(row.try_get(Column::AdDescription.name())?);
        ad.set_ad_cta_text(row.try_get::<String, _>(Column::AdCtaText.name())?);
        ad.set_ad_cta_link(row.try_get::<String, _>(Column::AdCtaLink.name())?);
        ad.set_ad_image(row.try_get::<String, _>(Column::AdImage.name())?);
        Ok(ad)
    }
}
