//! Message catalog and diagnostic localization.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use nmmsn_model::EnZh;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::LocaleError;

/// Chinese catalog embedded at compile time.
pub const EMBEDDED_ZH: &str = include_str!("../locales/zh.toml");

/// Prefix of a structured diagnostic line.
const PIPE_PREFIX: &str = "Pipe:";
/// Marker after which the translatable reason starts.
const REASON_MARKER: &str = "Reason: ";

/// Display language of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English; messages are already written in it.
    En,
    #[default]
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "zh" | "chinese" | "中文" => Ok(Language::Zh),
            _ => Err(format!("Unsupported language: {s}")),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    messages: BTreeMap<String, String>,
}

/// English to Chinese message lookup.
///
/// Read-only once built; load it at startup and pass it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    zh: BTreeMap<String, String>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_ZH) {
            Ok(catalog) => catalog,
            Err(error) => {
                error!(%error, "embedded message catalog is invalid");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LocaleError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|source| LocaleError::Parse { source })?;
        Ok(Self { zh: file.messages })
    }

    /// Loads a catalog file.
    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        let content = std::fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|source| LocaleError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), entries = file.messages.len(), "loaded message catalog");
        Ok(Self { zh: file.messages })
    }

    /// Adds entries of `other` on top of this catalog.
    #[must_use]
    pub fn merged(mut self, other: Catalog) -> Self {
        self.zh.extend(other.zh);
        self
    }

    pub fn len(&self) -> usize {
        self.zh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zh.is_empty()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.zh.contains_key(message)
    }

    /// Translates one message. Unknown messages are returned unchanged.
    pub fn translate<'a>(&'a self, message: &'a str, language: Language) -> &'a str {
        match language {
            Language::En => message,
            Language::Zh => match self.zh.get(message) {
                Some(translated) => translated,
                None => {
                    debug!(text = message, "no translation found");
                    message
                }
            },
        }
    }

    /// Localizes a newline-separated diagnostic into English and Chinese.
    ///
    /// Blank lines are dropped, the `Pipe: ... Reason: ` prefix is stripped
    /// from structured lines, and each remaining message is translated.
    pub fn localize_diagnostic(&self, diagnostic: &str) -> EnZh {
        let messages: Vec<&str> = diagnostic
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(reason_of)
            .collect();
        let zh: Vec<&str> = messages
            .iter()
            .map(|&message| self.translate(message, Language::Zh))
            .collect();
        EnZh {
            en: messages.join("\n"),
            zh: zh.join("\n"),
        }
    }
}

/// The reason part of a structured line, or the whole line otherwise.
fn reason_of(line: &str) -> &str {
    if line.starts_with(PIPE_PREFIX)
        && let Some(index) = line.rfind(REASON_MARKER)
    {
        return &line[index + REASON_MARKER.len()..];
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_structured_prefix() {
        assert_eq!(
            reason_of("Pipe: construct_nmmsn. Status: warning. Reason: Invalid NMM type."),
            "Invalid NMM type."
        );
        assert_eq!(reason_of("Invalid NMM type."), "Invalid NMM type.");
        assert_eq!(reason_of("Pipe: x. Status: failed."), "Pipe: x. Status: failed.");
    }

    #[test]
    fn english_is_identity() {
        let catalog = Catalog::embedded();
        assert_eq!(
            catalog.translate("Invalid NMM type.", Language::En),
            "Invalid NMM type."
        );
        assert_eq!(catalog.translate("Invalid NMM type.", Language::Zh), "无效的药材类型。");
    }

    #[test]
    fn parses_language() {
        assert_eq!("ZH".parse::<Language>(), Ok(Language::Zh));
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn merged_catalog_overrides() {
        let custom = Catalog::from_toml_str(
            r#"
            [messages]
            "Invalid NMM type." = "药材类型无效。"
            "#,
        )
        .unwrap();
        let catalog = Catalog::embedded().merged(custom);
        assert_eq!(catalog.translate("Invalid NMM type.", Language::Zh), "药材类型无效。");
        assert!(catalog.contains("Species inclusion detected."));
    }
}
