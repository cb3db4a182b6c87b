use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Retry policy parameters (optional `[retry]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per list (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

/// Global configuration loaded from `~/.config/flm/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlmConfig {
    /// Directory holding the mirrored lists and `metadata.json`.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout; some lists are several megabytes.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Optional User-Agent header; curl's default is used when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("registry")
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for FlmConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            retry: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<FlmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FlmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<FlmConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: FlmConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FlmConfig::default();
        assert_eq!(cfg.store_dir, PathBuf::from("registry"));
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 300);
        assert!(cfg.user_agent.is_none());
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FlmConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FlmConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.store_dir, cfg.store_dir);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: FlmConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.store_dir, PathBuf::from("registry"));
        assert_eq!(cfg.connect_timeout_secs, 15);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            store_dir = "/srv/filters"
            timeout_secs = 60
            user_agent = "flm/0.1"

            [retry]
            max_attempts = 3
            base_delay_secs = 0.5
            max_delay_secs = 15
        "#;
        let cfg: FlmConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.store_dir, PathBuf::from("/srv/filters"));
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.user_agent.as_deref(), Some("flm/0.1"));
        let retry = cfg.retry.as_ref().unwrap();
        assert_eq!(retry.max_attempts, 3);
        assert!((retry.base_delay_secs - 0.5).abs() < 1e-9);
        assert_eq!(retry.max_delay_secs, 15);
    }

    #[test]
    fn load_from_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(load_from(&path).is_err());
        fs::write(&path, "store_dir = \"out\"\n").unwrap();
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.store_dir, PathBuf::from("out"));
    }
}
