//! `flm normalize` – print what the change detector compares.

use anyhow::Result;
use flm_core::normalize::normalize;
use std::path::Path;

use super::compare::read_lossy;

pub fn run_normalize(path: &Path) -> Result<()> {
    println!("{}", normalize_file(path)?);
    Ok(())
}

fn normalize_file(path: &Path) -> Result<String> {
    Ok(normalize(&read_lossy(path)?))
}
