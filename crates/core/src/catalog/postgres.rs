//! PostgreSQL catalog reader over `information_schema`.
//!
//! Each call opens its own connection and closes it before returning, on the
//! error path as well. Nothing is pooled or cached between calls.

use async_trait::async_trait;
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::{Connection, Row};
use tracing::{debug, warn};

use super::{Catalog, CatalogConfig, CatalogError, ColumnFetch, Result};
use crate::model::RawColumn;

// `$1` is the configured schema; NULL means the connection's current schema.
const TABLES_QUERY: &str = r#"
    SELECT t.table_name::text AS name
    FROM information_schema.tables t
    WHERE t.table_type = 'BASE TABLE'
      AND t.table_schema = COALESCE($1::text, current_schema())
    ORDER BY t.table_name
"#;

// One row per column: the primary-key flag is an EXISTS, not a join, so a
// column in several key constraints is not repeated.
const COLUMNS_QUERY: &str = r#"
    SELECT c.column_name::text AS name,
           c.data_type::text AS data_type,
           c.character_maximum_length::text AS max_length,
           c.column_default::text AS default_value,
           c.is_nullable::text AS is_nullable,
           CASE WHEN EXISTS (
               SELECT 1
               FROM information_schema.key_column_usage ku
               JOIN information_schema.table_constraints tc
                 ON tc.constraint_name = ku.constraint_name
                AND tc.constraint_schema = ku.constraint_schema
               WHERE tc.constraint_type = 'PRIMARY KEY'
                 AND ku.table_schema = c.table_schema
                 AND ku.table_name = c.table_name
                 AND ku.column_name = c.column_name
           ) THEN '1' ELSE '0' END AS "primary"
    FROM information_schema.columns c
    WHERE c.table_name = $1
      AND c.table_schema = COALESCE($2::text, current_schema())
    ORDER BY c.ordinal_position
"#;

pub struct PostgresCatalog {
    config: CatalogConfig,
}

impl PostgresCatalog {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<PgConnection> {
        PgConnection::connect(&self.config.url)
            .await
            .map_err(CatalogError::Connect)
    }

    async fn read_columns(&self, conn: &mut PgConnection, table: &str) -> ColumnFetch {
        let rows = match sqlx::query(COLUMNS_QUERY)
            .bind(table)
            .bind(self.config.schema.as_deref())
            .fetch_all(&mut *conn)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                return ColumnFetch::Failed {
                    fields: Vec::new(),
                    cause: CatalogError::query(table, e),
                }
            }
        };

        ColumnFetch::collect(rows.iter().map(decode_column))
    }
}

#[async_trait]
impl Catalog for PostgresCatalog {
    async fn table_names(&self) -> Result<Vec<String>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query(TABLES_QUERY)
            .bind(self.config.schema.as_deref())
            .fetch_all(&mut conn)
            .await;
        close(conn).await;

        let rows = result.map_err(|e| CatalogError::query("information_schema.tables", e))?;
        rows.iter()
            .map(|row| decode_text(row, "name"))
            .collect()
    }

    async fn fetch_columns(&self, table: &str) -> Result<ColumnFetch> {
        let mut conn = self.connect().await?;
        let fetch = self.read_columns(&mut conn, table).await;
        close(conn).await;

        debug!(table, fields = fetch.fields().len(), failed = fetch.is_failed(), "read column metadata");
        Ok(fetch)
    }
}

async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!(error = %e, "failed to close catalog connection cleanly");
    }
}

fn decode_column(row: &PgRow) -> Result<RawColumn> {
    Ok(RawColumn {
        name: decode_text(row, "name")?,
        data_type: decode_optional(row, "data_type")?,
        max_length: decode_optional(row, "max_length")?,
        default_value: decode_optional(row, "default_value")?,
        is_nullable: decode_optional(row, "is_nullable")?,
        primary: decode_optional(row, "primary")?,
    })
}

fn decode_text(row: &PgRow, column: &str) -> Result<String> {
    row.try_get::<String, _>(column)
        .map_err(|source| CatalogError::Decode {
            column: column.to_string(),
            source,
        })
}

fn decode_optional(row: &PgRow, column: &str) -> Result<Option<String>> {
    row.try_get::<Option<String>, _>(column)
        .map_err(|source| CatalogError::Decode {
            column: column.to_string(),
            source,
        })
}
