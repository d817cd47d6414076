//! Per-table output files.
//!
//! A block is written to a temporary file next to its destination and then
//! persisted over `<table>.<ext>`, replacing any previous artifact. A failed
//! write leaves the previous file (or no file) in place, never a truncated one.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::config::{LineEnding, OutputConfig};
use crate::error::{CodegenError, Result};

pub struct BlockWriter {
    dir: PathBuf,
    extension: String,
    line_ending: LineEnding,
}

impl BlockWriter {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>, line_ending: LineEnding) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
            line_ending,
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(&output.path, &output.extension, output.line_ending)
    }

    pub fn output_path(&self, table: &str) -> Result<PathBuf> {
        if table.is_empty() || table == "." || table == ".." || table.contains(['/', '\\']) {
            return Err(CodegenError::InvalidTableName(table.to_string()));
        }
        Ok(self.dir.join(format!("{table}.{}", self.extension)))
    }

    /// Replaces the table's file with `block` plus a trailing line ending,
    /// UTF-8 without a byte-order mark.
    pub fn write(&self, table: &str, block: &str) -> Result<PathBuf> {
        let path = self.output_path(table)?;
        let write_err = |source| CodegenError::Write {
            table: table.to_string(),
            source,
        };

        let mut file = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        file.write_all(block.as_bytes()).map_err(write_err)?;
        file.write_all(self.line_ending.as_str().as_bytes()).map_err(write_err)?;
        file.as_file().sync_all().map_err(write_err)?;
        file.persist(&path).map_err(|e| write_err(e.error))?;

        Ok(path)
    }
}
