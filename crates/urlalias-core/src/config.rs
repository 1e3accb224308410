use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Site operating mode. Mirrors the host's production switch: `live` serves
/// real traffic, `testing` behaves like live but never upgrades redirects to
/// 301, `debug` renders the computed target instead of redirecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductionStatus {
    #[default]
    Live,
    Testing,
    Debug,
}

/// Global configuration loaded from `~/.config/urlalias/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Operating mode; see [`ProductionStatus`].
    #[serde(default)]
    pub production_status: ProductionStatus,
    /// Default page size for the alias listing.
    pub default_per_page: u32,
    /// Optional override for the alias database path (None = XDG state dir).
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            production_status: ProductionStatus::Live,
            default_per_page: 25,
            db_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlalias")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ServiceConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ServiceConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ServiceConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.production_status, ProductionStatus::Live);
        assert_eq!(cfg.default_per_page, 25);
        assert!(cfg.db_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ServiceConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ServiceConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.production_status, cfg.production_status);
        assert_eq!(parsed.default_per_page, cfg.default_per_page);
    }

    #[test]
    fn config_toml_production_status() {
        let toml = r#"
            production_status = "debug"
            default_per_page = 10
        "#;
        let cfg: ServiceConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.production_status, ProductionStatus::Debug);
        assert_eq!(cfg.default_per_page, 10);

        let toml_testing = r#"
            production_status = "testing"
            default_per_page = 50
        "#;
        let cfg: ServiceConfig = toml::from_str(toml_testing).unwrap();
        assert_eq!(cfg.production_status, ProductionStatus::Testing);
    }

    #[test]
    fn config_toml_db_path() {
        let toml = r#"
            default_per_page = 25
            db_path = "/tmp/alias-test.db"
        "#;
        let cfg: ServiceConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.db_path.as_deref(), Some(std::path::Path::new("/tmp/alias-test.db")));
        // production_status missing falls back to live
        assert_eq!(cfg.production_status, ProductionStatus::Live);
    }
}
