//! `flm sync` – mirror the catalog into the store directory.

use anyhow::{Context, Result};
use flm_core::catalog;
use flm_core::config::FlmConfig;
use flm_core::fetch::Fetcher;
use flm_core::mirror::{self, Outcome, SourceReport, SyncOptions};
use flm_core::store::Store;

pub async fn run_sync(cfg: FlmConfig, dry_run: bool) -> Result<()> {
    let store = Store::open(&cfg.store_dir)?;
    let fetcher = Fetcher::from_config(&cfg);
    let opts = SyncOptions { dry_run };

    // Sequential blocking I/O; keep it off the async worker threads.
    let summary = tokio::task::spawn_blocking(move || {
        mirror::run(catalog::catalog(), &fetcher, &store, opts)
    })
    .await
    .context("sync task panicked")??;

    for line in summary.reports.iter().filter_map(report_line) {
        println!("{}", line);
    }
    println!(
        "{} updated, {} unchanged, {} failed{}",
        summary.updated(),
        summary.unchanged(),
        summary.failed(),
        if dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}

/// Stdout line for one list. Failures are already on stderr from the mirror loop.
fn report_line(report: &SourceReport) -> Option<String> {
    let status = match &report.outcome {
        Outcome::Updated => "updated",
        Outcome::Unchanged => "unchanged",
        Outcome::Failed(_) => return None,
    };
    Some(format!("{:<10} {}  {}", status, report.file_name, report.title))
}
