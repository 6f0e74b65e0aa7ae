//! User configuration: built-in defaults + optional TOML file.
//!
//! ```toml
//! precision = 4
//!
//! [root_finder]
//! max_iterations = 500
//! tolerance = 1e-12
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::polynomial::RootFinder;
use crate::core::precision::{Precision, NO_ROUNDING};
use crate::debug_log;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Digits kept in CLI output; -1 disables rounding.
    pub precision: i32,
    pub root_finder: RootFinder,
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: NO_ROUNDING, root_finder: RootFinder::default() }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(txt).context("parsing config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("loading {}", path.display()))
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        let explicit = cli_path.is_some();
        match resolve_config_path(cli_path) {
            Some(p) if explicit || p.exists() => {
                debug_log!("config: {}", p.display());
                Self::from_toml_file(&p)
            }
            _ => {
                debug_log!("config: built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn precision(&self) -> Precision {
        // validated on load
        Precision::new(self.precision).unwrap_or(Precision::NONE)
    }

    fn validate(&self) -> Result<()> {
        Precision::new(self.precision)?;
        if self.root_finder.max_iterations == 0 {
            bail!("root_finder.max_iterations must be positive");
        }
        if !(self.root_finder.tolerance.is_finite() && self.root_finder.tolerance > 0.0) {
            bail!("root_finder.tolerance must be a positive number");
        }
        Ok(())
    }
}

/// ~/.litearray/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".litearray").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let cfg = Config::from_toml_str("precision = 3\n[root_finder]\nmax_iterations = 50\n").unwrap();
        assert_eq!(cfg.precision, 3);
        assert_eq!(cfg.root_finder.max_iterations, 50);
        assert_eq!(cfg.root_finder.tolerance, RootFinder::default().tolerance);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_toml_str("precision = 12").is_err());
        assert!(Config::from_toml_str("[root_finder]\nmax_iterations = 0").is_err());
        assert!(Config::from_toml_str("[root_finder]\ntolerance = -1.0").is_err());
        assert!(Config::from_toml_str("colour = true").is_err());
    }

    #[test]
    fn explicit_path_wins() {
        let p = Some(PathBuf::from("/tmp/x.toml"));
        assert_eq!(resolve_config_path(&p), p);
    }
}
