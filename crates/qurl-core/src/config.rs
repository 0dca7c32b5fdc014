use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::url_model::{BuildOptions, QueryOrder, DEFAULT_HOST, DEFAULT_SCHEME};

/// Global configuration loaded from `~/.config/qurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QurlConfig {
    /// Scheme substituted for an empty protocol.
    #[serde(default = "default_scheme")]
    pub default_scheme: String,
    /// Host substituted for an empty host.
    #[serde(default = "default_host")]
    pub default_host: String,
    /// Order of variables in generated query strings.
    #[serde(default)]
    pub query_order: QueryOrder,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for QurlConfig {
    fn default() -> Self {
        Self {
            default_scheme: default_scheme(),
            default_host: default_host(),
            query_order: QueryOrder::default(),
        }
    }
}

impl QurlConfig {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            default_scheme: self.default_scheme.clone(),
            default_host: self.default_host.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<QurlConfig> {
    if !path.exists() {
        let default_cfg = QurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: QurlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = QurlConfig::default();
        assert_eq!(cfg.default_scheme, "http");
        assert_eq!(cfg.default_host, "localhost");
        assert_eq!(cfg.query_order, QueryOrder::NewestFirst);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = QurlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: QurlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_scheme = "https"
            default_host = "api.example.com"
            query_order = "sorted"
        "#;
        let cfg: QurlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_scheme, "https");
        assert_eq!(cfg.default_host, "api.example.com");
        assert_eq!(cfg.query_order, QueryOrder::Sorted);

        let opts = cfg.build_options();
        assert_eq!(opts.default_scheme, "https");
        assert_eq!(opts.default_host, "api.example.com");
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: QurlConfig = toml::from_str("query_order = \"insertion\"").unwrap();
        assert_eq!(cfg.default_scheme, "http");
        assert_eq!(cfg.default_host, "localhost");
        assert_eq!(cfg.query_order, QueryOrder::Insertion);
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, QurlConfig::default());

        fs::write(&path, "default_host = \"svc.local\"\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.default_host, "svc.local");
    }
}
