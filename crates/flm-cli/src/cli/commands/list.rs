//! `flm list` – print the catalog.

use anyhow::Result;
use flm_core::catalog;

pub fn run_list() -> Result<()> {
    for source in catalog::catalog() {
        println!(
            "{}  {:<8}  {}  {}",
            source.file_name(),
            source.group,
            if source.enabled_by_default { "on " } else { "off" },
            source.title
        );
    }
    Ok(())
}
