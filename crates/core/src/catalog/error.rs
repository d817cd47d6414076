use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while reading catalog metadata
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The driver could not open a connection. Always fatal for the run.
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    /// A catalog query failed to execute
    #[error("Catalog query failed for {target}: {source}")]
    Query {
        target: String,
        #[source]
        source: sqlx::Error,
    },

    /// A result row could not be decoded
    #[error("Failed to decode column '{column}': {source}")]
    Decode {
        column: String,
        #[source]
        source: sqlx::Error,
    },
}

impl CatalogError {
    pub fn query(target: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Query {
            target: target.into(),
            source,
        }
    }
}
