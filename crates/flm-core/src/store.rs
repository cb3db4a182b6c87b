//! On-disk mirror: one `<id>.txt` per list plus `metadata.json`.
//!
//! Writes go to a `.part` sibling first and are renamed over the final path,
//! so a reader never sees a half-written list.

use crate::source_id::file_name;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Name of the manifest inside the store directory.
pub const MANIFEST_FILE_NAME: &str = "metadata.json";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.txt` → `a.txt.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create store dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn list_path(&self, id: &str) -> PathBuf {
        self.dir.join(file_name(id))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE_NAME)
    }

    /// Previously stored content of list `id`, or `""` if it was never stored.
    pub fn read(&self, id: &str) -> Result<String> {
        let path = self.list_path(id);
        match fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    /// Overwrites list `id` with `text`.
    pub fn write(&self, id: &str, text: &str) -> Result<()> {
        write_replace(&self.list_path(id), text.as_bytes())
    }

    /// Overwrites the manifest with `json`.
    pub fn write_manifest(&self, json: &str) -> Result<()> {
        write_replace(&self.manifest_path(), json.as_bytes())
    }
}

fn write_replace(final_path: &Path, data: &[u8]) -> Result<()> {
    let tp = temp_path(final_path);
    fs::write(&tp, data).with_context(|| format!("failed to write {}", tp.display()))?;
    if let Err(e) = fs::rename(&tp, final_path) {
        let _ = fs::remove_file(&tp);
        return Err(e).with_context(|| {
            format!("failed to rename {} to {}", tp.display(), final_path.display())
        });
    }
    Ok(())
}
