//! One mirror run: fetch every catalogued list in order, rewrite the stored
//! copy only when it changed, and publish the manifest.
//!
//! A list that fails to fetch is logged and skipped; it gets no manifest
//! entry and its stored copy is left as it was. Store and manifest I/O
//! failures abort the run.

use crate::catalog::Source;
use crate::fetch::{FetchError, Fetcher};
use crate::manifest::{Manifest, ManifestEntry};
use crate::normalize::is_changed;
use crate::store::Store;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Fetch and compare only; write neither lists nor the manifest.
    pub dry_run: bool,
}

/// What happened to one list.
#[derive(Debug)]
pub enum Outcome {
    /// Content changed (or was new) and the stored copy was rewritten.
    Updated,
    /// Normalized content matches the stored copy; nothing written.
    Unchanged,
    Failed(FetchError),
}

#[derive(Debug)]
pub struct SourceReport {
    pub title: String,
    pub file_name: String,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<SourceReport>,
    pub manifest: Manifest,
}

impl RunSummary {
    pub fn updated(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Updated))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Compares `fetched` against the stored copy of `source` and writes it when changed.
///
/// The raw fetched text is written, not its normalized form.
pub fn apply_fetched(
    source: &Source,
    fetched: &str,
    store: &Store,
    dry_run: bool,
) -> Result<Outcome> {
    let current = store.read(&source.id)?;
    if !is_changed(&current, fetched) {
        return Ok(Outcome::Unchanged);
    }
    if !dry_run {
        store
            .write(&source.id, fetched)
            .with_context(|| format!("failed to store list '{}'", source.title))?;
    }
    Ok(Outcome::Updated)
}

/// Processes `sources` sequentially in order and writes `metadata.json`.
pub fn run(
    sources: &[Source],
    fetcher: &Fetcher,
    store: &Store,
    opts: SyncOptions,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for source in sources {
        tracing::info!(title = %source.title, "processing filter");

        let outcome = match fetcher.fetch(&source.url) {
            Ok(text) => {
                let outcome = apply_fetched(source, &text, store, opts.dry_run)?;
                summary.manifest.push(ManifestEntry::from(source));
                outcome
            }
            Err(e) => {
                tracing::warn!(
                    title = %source.title,
                    url = %source.url,
                    error = %e,
                    "failed to fetch filter"
                );
                Outcome::Failed(e)
            }
        };

        match &outcome {
            Outcome::Updated => {
                tracing::info!(title = %source.title, file = %source.file_name(), "list updated")
            }
            Outcome::Unchanged => tracing::debug!(title = %source.title, "list unchanged"),
            Outcome::Failed(_) => {}
        }

        summary.reports.push(SourceReport {
            title: source.title.clone(),
            file_name: source.file_name(),
            outcome,
        });
    }

    if !opts.dry_run {
        let json = summary.manifest.to_json()?;
        store.write_manifest(&json).with_context(|| {
            format!("failed to write manifest {}", store.manifest_path().display())
        })?;
    }

    tracing::info!(
        updated = summary.updated(),
        unchanged = summary.unchanged(),
        failed = summary.failed(),
        "mirror run finished"
    );

    Ok(summary)
}
