mod config;
mod error;
pub mod rules;
pub mod writer;

pub use config::{Config, DatabaseConfig, LineEnding, OutputConfig, CONFIG_FILE, DATABASE_URL_ENV};
pub use error::{CodegenError, Result};

use std::path::PathBuf;

use tracing::{debug, info, warn};
use validgen_core::catalog::Catalog;
use writer::BlockWriter;

/// What happened to one table during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub table: String,
    pub fields: usize,
    pub rules: usize,
    /// Written file; `None` in check mode.
    pub output: Option<PathBuf>,
    /// Set when the column read failed; the block then covers the partial field list.
    pub read_error: Option<String>,
    /// Field names that are not valid member identifiers.
    pub invalid_names: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tables: Vec<TableReport>,
}

impl RunSummary {
    pub fn rules(&self) -> usize {
        self.tables.iter().map(|t| t.rules).sum()
    }

    pub fn failed_reads(&self) -> usize {
        self.tables.iter().filter(|t| t.read_error.is_some()).count()
    }
}

/// Progress notifications emitted while a run walks the table list.
#[derive(Debug)]
pub enum Progress<'a> {
    Listed(usize),
    Table(&'a TableReport),
}

/// Reads the catalog and renders every table without writing anything.
pub async fn check<C>(catalog: &C, line_ending: LineEnding, on_progress: impl FnMut(Progress<'_>)) -> Result<RunSummary>
where
    C: Catalog + ?Sized,
{
    run(catalog, line_ending, None, on_progress).await
}

/// Reads the catalog and writes one rule file per table.
pub async fn generate<C>(config: &Config, catalog: &C, on_progress: impl FnMut(Progress<'_>)) -> Result<RunSummary>
where
    C: Catalog + ?Sized,
{
    let writer = BlockWriter::from_config(&config.output);
    run(catalog, config.output.line_ending, Some(&writer), on_progress).await
}

async fn run<C>(
    catalog: &C,
    line_ending: LineEnding,
    writer: Option<&BlockWriter>,
    mut on_progress: impl FnMut(Progress<'_>),
) -> Result<RunSummary>
where
    C: Catalog + ?Sized,
{
    let tables = catalog.list_tables().await?;
    info!(tables = tables.len(), "listed tables");
    on_progress(Progress::Listed(tables.len()));

    let mut summary = RunSummary::default();

    // Strictly one table at a time: read, reduce, render, write.
    for table in tables {
        let fetch = catalog.fetch_columns(&table).await?;

        let read_error = fetch.cause().map(|cause| cause.to_string());
        if let Some(error) = &read_error {
            warn!(table = %table, error = %error, "column metadata read failed, writing rules for fields read so far");
        }

        let fields = fetch.into_fields();
        let invalid_names = rules::invalid_member_names(&fields);
        if !invalid_names.is_empty() {
            warn!(table = %table, names = ?invalid_names, "field names are not valid member identifiers");
        }

        let statements = rules::render_rules(&fields);
        let block = rules::render_block(&statements, line_ending);

        let output = match writer {
            Some(writer) => Some(writer.write(&table, &block)?),
            None => None,
        };

        debug!(table = %table, fields = fields.len(), rules = statements.len(), "rendered table");

        summary.tables.push(TableReport {
            table,
            fields: fields.len(),
            rules: statements.len(),
            output,
            read_error,
            invalid_names,
        });
        if let Some(report) = summary.tables.last() {
            on_progress(Progress::Table(report));
        }
    }

    info!(
        tables = summary.tables.len(),
        rules = summary.rules(),
        failed_reads = summary.failed_reads(),
        "run complete"
    );

    Ok(summary)
}
