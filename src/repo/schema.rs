use once_cell::sync::Lazy;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

pub const TABLE_NAME: &str = "display_ads_table";
/// Surrogate key assigned by SQLite; unrelated to the `uuid` column.
pub const ID_COLUMN: &str = "ID";

/// Data columns of the display ads table, in declaration order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum_macros::Display, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Column {
    Uuid,
    CreativeInstanceId,
    Position,
    TabId,
    AdTitle,
    AdDescription,
    #[strum(serialize = "cta_text")]
    AdCtaText,
    #[strum(serialize = "cta_link")]
    AdCtaLink,
    AdImage,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ColumnType {
    #[display("TEXT")]
    Text,
    #[display("INT")]
    Int,
}

impl Column {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn sql_type(self) -> ColumnType {
        match self {
            Column::Position | Column::TabId => ColumnType::Int,
            _ => ColumnType::Text,
        }
    }
}

pub fn column_names() -> Vec<&'static str> {
    Column::iter()
        .map(Column::name)
        .collect()
}

pub static CREATE_TABLE: Lazy<String> = Lazy::new(|| {
    let columns = Column::iter()
        .map(|column| format!("{} {}", column.name(), column.sql_type()))
        .collect::<Vec<String>>()
        .join(", ");
    format!("CREATE TABLE IF NOT EXISTS {TABLE_NAME} ({ID_COLUMN} INTEGER PRIMARY KEY AUTOINCREMENT, {columns})")
});
