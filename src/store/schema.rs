//! Static description of the `tasks` table

pub const TASKS_TABLE: &str = "tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// `INTEGER PRIMARY KEY AUTOINCREMENT`; ids are never reused.
    PrimaryKey,
    Integer,
    Text,
    Boolean,
    Timestamp,
}

impl ColumnType {
    pub fn sql(self) -> &'static str {
        match self {
            ColumnType::PrimaryKey => "INTEGER PRIMARY KEY AUTOINCREMENT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Text => "TEXT",
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::Timestamp => "TIMESTAMP",
        }
    }
}

/// Column order matches the field order of [`super::Task`] and the
/// positional reads in the row mapper.
pub const TASK_COLUMNS: &[(&str, ColumnType)] = &[
    ("id", ColumnType::PrimaryKey),
    ("description", ColumnType::Text),
    ("completed", ColumnType::Boolean),
    ("created_at", ColumnType::Timestamp),
    ("updated_at", ColumnType::Timestamp),
    ("deleted_at", ColumnType::Timestamp),
];

pub fn create_table_sql() -> String {
    let columns: Vec<String> = TASK_COLUMNS
        .iter()
        .map(|(name, ty)| format!("{} {}", name, ty.sql()))
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        TASKS_TABLE,
        columns.join(", ")
    )
}

pub fn column_list() -> String {
    TASK_COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
