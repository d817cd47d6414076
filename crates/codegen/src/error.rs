use thiserror::Error;
use std::path::PathBuf;
use validgen_core::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Config file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to write rules for table '{table}': {source}")]
    Write {
        table: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Table name '{0}' cannot be used as a file name")]
    InvalidTableName(String),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
