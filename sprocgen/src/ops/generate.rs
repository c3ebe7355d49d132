//! Generate operation: schema in, one SQL script out.
//!
//! Every table is handled by its own worker task that reads the columns and
//! renders an immutable [`GeneratedScript`]. Workers are joined in listing
//! order by a single writer, so the sink needs no locking and the output
//! order never depends on scheduling.

use std::{collections::VecDeque, sync::Arc};

use eyre::{Context, Result};
use sprocgen_codegen::{GeneratedScript, ScriptGenerator};
use sprocgen_schema::{SchemaError, SchemaProvider};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::Semaphore,
    task::JoinHandle,
};
use tracing::{debug, error, info, warn};

use super::TableFilter;
use crate::reports::{FailedTable, GenerateReport, TableSummary};

/// Options for the generate operation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Tables processed at once.
    pub concurrency: usize,
    /// Skip tables whose columns can't be read instead of aborting.
    pub keep_going: bool,
    pub filter: TableFilter,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            concurrency: 8,
            keep_going: false,
            filter: TableFilter::default(),
        }
    }
}

type Worker = JoinHandle<std::result::Result<GeneratedScript, SchemaError>>;

/// Pending workers in listing order. Whatever is left when this is dropped
/// gets aborted, so an early return never leaves tasks running.
struct Workers(VecDeque<(String, Worker)>);

impl Workers {
    fn pop(&mut self) -> Option<(String, Worker)> {
        self.0.pop_front()
    }
}

impl Drop for Workers {
    fn drop(&mut self) {
        for (_, handle) in &self.0 {
            handle.abort();
        }
    }
}

/// Execute the generate operation, appending every script to `sink`.
pub async fn generate<W>(
    provider: Arc<dyn SchemaProvider>,
    generator: ScriptGenerator,
    opts: &GenerateOptions,
    sink: &mut W,
) -> Result<GenerateReport>
where
    W: AsyncWrite + Unpin,
{
    let listed = provider
        .list_tables()
        .await
        .wrap_err("can't get the list of all tables")?;
    let tables = opts.filter.apply(listed);
    info!(
        source = provider.kind(),
        tables = tables.len(),
        concurrency = opts.concurrency,
        "generating stored procedures"
    );

    let mut workers = spawn_workers(provider, generator, tables, opts.concurrency);
    let mut report = GenerateReport::new();

    while let Some((table, handle)) = workers.pop() {
        let result = handle
            .await
            .wrap_err_with(|| format!("worker for table {table} stopped unexpectedly"))?;

        match result {
            Ok(script) => {
                for (kind, reason) in script.skipped() {
                    warn!(table = %table, kind = %kind, "skipped: {}", reason);
                }
                sink.write_all(script.as_bytes())
                    .await
                    .wrap_err_with(|| format!("can't write procedures for {table} table"))?;
                debug!(table = %table, procedures = script.procedure_count(), "written");
                report.tables.push(TableSummary::from_script(&script));
            }
            Err(err) if opts.keep_going && err.is_table_scoped() => {
                let reason = format!("{:#}", eyre::Report::new(err));
                warn!(table = %table, "skipping table: {}", reason);
                report.failed.push(FailedTable {
                    name: table,
                    reason,
                });
            }
            Err(err) => {
                error!(table = %table, "{}", err);
                return Err(err)
                    .wrap_err_with(|| format!("failed to generate procedures for {table} table"));
            }
        }
    }

    sink.flush().await.wrap_err("can't flush the output")?;
    info!(
        tables = report.tables.len(),
        procedures = report.procedure_count(),
        failed = report.failed.len(),
        "generation finished"
    );

    Ok(report)
}

fn spawn_workers(
    provider: Arc<dyn SchemaProvider>,
    generator: ScriptGenerator,
    tables: Vec<String>,
    concurrency: usize,
) -> Workers {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let generator = Arc::new(generator);

    let handles = tables
        .into_iter()
        .map(|table| {
            let provider = Arc::clone(&provider);
            let generator = Arc::clone(&generator);
            let permits = Arc::clone(&permits);
            let name = table.clone();

            let handle = tokio::spawn(async move {
                // The semaphore is never closed, so this always holds a permit.
                let _permit = permits.acquire_owned().await;
                debug!(table = %table, "reading columns");
                let columns = provider.list_columns(&table).await?;
                Ok::<_, SchemaError>(generator.generate(&table, &columns))
            });
            (name, handle)
        })
        .collect();

    Workers(handles)
}
