#![allow(dead_code)]

use cinema_seaorm_schema::migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

/// Fresh in-memory SQLite database with every migration applied.
pub async fn migrated_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// One row of `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, upper-cased so the comparison ignores the casing the
    /// query builder happens to emit.
    pub column_type: String,
    pub not_null: bool,
    pub default: Option<String>,
}

impl ColumnInfo {
    pub fn new(name: &str, column_type: &str, not_null: bool, default: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            column_type: column_type.to_uppercase(),
            not_null,
            default: default.map(str::to_owned),
        }
    }
}

/// Columns of `table`, in declaration order.
pub async fn columns(db: &DatabaseConnection, table: &str) -> Vec<ColumnInfo> {
    db.query_all(Statement::from_string(
        DbBackend::Sqlite,
        format!("PRAGMA table_info(\"{table}\")"),
    ))
    .await
    .unwrap()
    .iter()
    .map(|row| ColumnInfo {
        name: row.try_get::<String>("", "name").unwrap(),
        column_type: row.try_get::<String>("", "type").unwrap().to_uppercase(),
        not_null: row.try_get::<i32>("", "notnull").unwrap() != 0,
        default: row.try_get::<Option<String>>("", "dflt_value").unwrap(),
    })
    .collect()
}

/// `(column, referenced table)` pairs for every foreign key on `table`,
/// sorted by column.
pub async fn foreign_keys(db: &DatabaseConnection, table: &str) -> Vec<(String, String)> {
    let mut keys: Vec<(String, String)> = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            format!("PRAGMA foreign_key_list(\"{table}\")"),
        ))
        .await
        .unwrap()
        .iter()
        .map(|row| {
            (
                row.try_get::<String>("", "from").unwrap(),
                row.try_get::<String>("", "table").unwrap(),
            )
        })
        .collect();
    keys.sort();
    keys
}
