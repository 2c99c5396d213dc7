//! SQL column wrappers
//!
//! Shallow forwarding over the SQL library's column metadata and row
//! access: capture name, ordinal and declared type from a fetched row and
//! read values by wrapper rather than by raw index. No schema management
//! happens here.

use crate::PlatformError;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo};

/// Metadata for one result-set column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    name: String,
    ordinal: usize,
    type_name: String,
}

impl SqlColumn {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// The database's declared type name (e.g. `INTEGER`, `TEXT`)
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Capture column metadata from a fetched row, in result-set order.
pub fn columns_of(row: &SqliteRow) -> Vec<SqlColumn> {
    row.columns()
        .iter()
        .map(|column| SqlColumn {
            name: column.name().to_string(),
            ordinal: column.ordinal(),
            type_name: column.type_info().name().to_string(),
        })
        .collect()
}

/// Read a column as text; `None` for SQL NULL.
pub fn text_value(row: &SqliteRow, column: &SqlColumn) -> Result<Option<String>, PlatformError> {
    row.try_get::<Option<String>, _>(column.ordinal)
        .map_err(PlatformError::from)
}

/// Read a column as a 64-bit integer; `None` for SQL NULL.
pub fn int_value(row: &SqliteRow, column: &SqlColumn) -> Result<Option<i64>, PlatformError> {
    row.try_get::<Option<i64>, _>(column.ordinal)
        .map_err(PlatformError::from)
}

/// Read a column as a double; `None` for SQL NULL.
pub fn real_value(row: &SqliteRow, column: &SqlColumn) -> Result<Option<f64>, PlatformError> {
    row.try_get::<Option<f64>, _>(column.ordinal)
        .map_err(PlatformError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn captures_column_metadata_and_values() {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("db");

        sqlx::query("CREATE TABLE widgets (uid INTEGER PRIMARY KEY, title TEXT, zoom REAL)")
            .execute(&pool)
            .await
            .expect("create");
        sqlx::query("INSERT INTO widgets (uid, title, zoom) VALUES (7, 'label', 1.5)")
            .execute(&pool)
            .await
            .expect("insert");

        let row = sqlx::query("SELECT uid, title, zoom FROM widgets")
            .fetch_one(&pool)
            .await
            .expect("fetch");

        let columns = columns_of(&row);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].name(), "uid");
        assert_eq!(columns[0].ordinal(), 0);
        assert_eq!(columns[0].type_name(), "INTEGER");
        assert_eq!(columns[1].name(), "title");
        assert_eq!(columns[2].name(), "zoom");

        assert_eq!(int_value(&row, &columns[0]).unwrap(), Some(7));
        assert_eq!(
            text_value(&row, &columns[1]).unwrap(),
            Some("label".to_string())
        );
        assert_eq!(real_value(&row, &columns[2]).unwrap(), Some(1.5));
    }

    #[tokio::test]
    async fn null_values_read_as_none() {
        let pool = SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .expect("db");

        sqlx::query("CREATE TABLE t (a TEXT)")
            .execute(&pool)
            .await
            .expect("create");
        sqlx::query("INSERT INTO t (a) VALUES (NULL)")
            .execute(&pool)
            .await
            .expect("insert");

        let row = sqlx::query("SELECT a FROM t")
            .fetch_one(&pool)
            .await
            .expect("fetch");
        let columns = columns_of(&row);
        assert_eq!(text_value(&row, &columns[0]).unwrap(), None);
    }
}
