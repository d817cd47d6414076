//! Catalog reading: listing user tables and fetching their column metadata.
//!
//! [`Catalog`] is the seam between the generator and the database. The only
//! driver-backed implementation is [`postgres::PostgresCatalog`], which reads
//! the standard `information_schema` views.

pub mod error;
pub mod postgres;

use async_trait::async_trait;

use crate::model::{filter_tables, FieldDescriptor, RawColumn};
use crate::reducer;
pub use error::{CatalogError, Result};

/// Connection settings handed to a catalog reader.
#[derive(Clone)]
pub struct CatalogConfig {
    /// Driver connection string.
    pub url: String,
    /// Schema to read; `None` uses the connection's current schema.
    pub schema: Option<String>,
}

impl CatalogConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

// The url usually carries credentials.
impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("url", &"<redacted>")
            .field("schema", &self.schema)
            .finish()
    }
}

/// Outcome of reading one table's columns.
///
/// A failed read still carries the descriptors decoded before the failure,
/// so an empty table and a failed read can be told apart.
#[derive(Debug)]
pub enum ColumnFetch {
    Complete(Vec<FieldDescriptor>),
    Failed {
        fields: Vec<FieldDescriptor>,
        cause: CatalogError,
    },
}

impl ColumnFetch {
    /// Reduces decoded rows in order, stopping at the first error and keeping
    /// the descriptors reduced before it.
    pub fn collect<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Result<RawColumn>>,
    {
        let mut fields = Vec::new();
        for row in rows {
            match row {
                Ok(raw) => fields.extend(reducer::reduce(raw)),
                Err(cause) => return Self::Failed { fields, cause },
            }
        }
        Self::Complete(fields)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        match self {
            Self::Complete(fields) | Self::Failed { fields, .. } => fields,
        }
    }

    pub fn into_fields(self) -> Vec<FieldDescriptor> {
        match self {
            Self::Complete(fields) | Self::Failed { fields, .. } => fields,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn cause(&self) -> Option<&CatalogError> {
        match self {
            Self::Complete(_) => None,
            Self::Failed { cause, .. } => Some(cause),
        }
    }
}

/// Read-only access to a database catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every user table name, unfiltered, in catalog order.
    async fn table_names(&self) -> Result<Vec<String>>;

    /// Column descriptors for one table, already reduced.
    ///
    /// Returns `Err` only for fatal failures such as an unreachable database.
    /// Query and decode failures are reported through [`ColumnFetch::Failed`].
    async fn fetch_columns(&self, table: &str) -> Result<ColumnFetch>;

    /// Table names eligible for rule generation; shadow tables are skipped.
    async fn list_tables(&self) -> Result<Vec<String>> {
        let names = self.table_names().await?;
        Ok(filter_tables(names))
    }
}
