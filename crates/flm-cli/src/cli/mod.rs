//! CLI for the FLM filter list mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use flm_core::config::{self, FlmConfig};
use std::path::{Path, PathBuf};

use commands::{run_compare, run_completions, run_list, run_man, run_normalize, run_sync};

/// Top-level CLI for the filter list mirror.
#[derive(Debug, Parser)]
#[command(name = "flm")]
#[command(about = "FLM: keeps a local mirror of ad-blocking filter lists", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/flm/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to ~/.local/state/flm/flm.log instead of stderr.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch every catalogued list, update changed ones, and write metadata.json.
    Sync {
        /// Directory for the mirrored lists (overrides `store_dir` from config).
        #[arg(long, value_name = "DIR")]
        store_dir: Option<PathBuf>,
        /// Fetch and compare only; do not write any file.
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the built-in catalog.
    List,

    /// Report whether two list files are equivalent after normalization.
    Compare {
        /// Previously stored list.
        old: PathBuf,
        /// Newly fetched list.
        new: PathBuf,
    },

    /// Print the normalized form of a list file.
    Normalize {
        /// Path to the list file.
        path: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        shell: Shell,
    },

    /// Print the man page (roff) on stdout.
    Man,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Sync { store_dir, dry_run } => {
                let mut cfg = load_config(self.config.as_deref())?;
                tracing::debug!("loaded config: {:?}", cfg);
                if let Some(dir) = store_dir {
                    cfg.store_dir = dir;
                }
                run_sync(cfg, dry_run).await?;
            }
            CliCommand::List => run_list()?,
            CliCommand::Compare { old, new } => run_compare(&old, &new)?,
            CliCommand::Normalize { path } => run_normalize(&path)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<FlmConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
