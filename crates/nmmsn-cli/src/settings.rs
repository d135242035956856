//! Optional TOML settings file.
//!
//! ```toml
//! pretty = true
//! catalog = "locales/custom.toml"
//! ```
//!
//! A relative `catalog` path is resolved against the settings file's
//! directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nmmsn_locale::Catalog;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Indent response JSON.
    pub pretty: bool,
    /// Message catalog merged over the embedded one.
    pub catalog: Option<PathBuf>,
}

impl Settings {
    /// Parses settings text, resolving a relative catalog path against `base`.
    pub fn from_toml_str(content: &str, base: Option<&Path>) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content).context("parse settings")?;
        if let (Some(base), Some(catalog)) = (base, settings.catalog.as_mut())
            && catalog.is_relative()
        {
            *catalog = base.join(&*catalog);
        }
        Ok(settings)
    }

    /// The embedded catalog, overlaid with the configured one if any.
    pub fn catalog(&self) -> Result<Catalog> {
        let embedded = Catalog::embedded();
        match &self.catalog {
            Some(path) => {
                let custom = Catalog::load(path)
                    .with_context(|| format!("load catalog {}", path.display()))?;
                Ok(embedded.merged(custom))
            }
            None => Ok(embedded),
        }
    }
}

/// Loads settings from `path`.
///
/// A missing file yields the defaults with a warning; a file that cannot be
/// read or parsed is an error.
pub fn load_settings(path: &Path) -> Result<Settings> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let settings = Settings::from_toml_str(&content, path.parent())
                .with_context(|| format!("settings file {}", path.display()))?;
            info!(path = %path.display(), "loaded settings");
            Ok(settings)
        }
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "settings file not found, using defaults");
            Ok(Settings::default())
        }
        Err(error) => Err(error).with_context(|| format!("read settings file {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(Settings::from_toml_str("", None).unwrap(), Settings::default());
    }

    #[test]
    fn relative_catalog_is_resolved() {
        let settings = Settings::from_toml_str(
            "pretty = true\ncatalog = \"zh.toml\"",
            Some(Path::new("/etc/nmmsn")),
        )
        .unwrap();
        assert!(settings.pretty);
        assert_eq!(settings.catalog, Some(PathBuf::from("/etc/nmmsn/zh.toml")));
    }

    #[test]
    fn absolute_catalog_is_kept() {
        let settings =
            Settings::from_toml_str("catalog = \"/srv/zh.toml\"", Some(Path::new("/etc")))
                .unwrap();
        assert_eq!(settings.catalog, Some(PathBuf::from("/srv/zh.toml")));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(Settings::from_toml_str("pretty = \"yes\"", None).is_err());
    }
}
