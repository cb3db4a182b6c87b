//! `flm compare` – run the change detector on two local files.

use anyhow::{Context, Result};
use flm_core::normalize::is_changed;
use std::fs;
use std::path::Path;

pub fn run_compare(old: &Path, new: &Path) -> Result<()> {
    if files_differ(old, new)? {
        println!("changed");
    } else {
        println!("same");
    }
    Ok(())
}

/// True when the two files would trigger a rewrite during sync.
fn files_differ(old: &Path, new: &Path) -> Result<bool> {
    Ok(is_changed(&read_lossy(old)?, &read_lossy(new)?))
}

pub(super) fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
