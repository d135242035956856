//! Bilingual terms and the logical operators that join them.

use std::fmt;
use std::str::FromStr;

/// Which label of a [`Term`] an operation keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// The Latin or English label.
    #[default]
    Primary,
    /// The Chinese label.
    Localized,
}

/// A bilingual label pair, e.g. (Latin species name, Chinese name).
///
/// Both labels are trimmed and never empty. Ordering compares the primary
/// label first, then the localized one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    primary: String,
    localized: String,
}

impl Term {
    /// Builds a term from two labels. Returns `None` when either label is
    /// blank after trimming.
    pub fn new(primary: impl AsRef<str>, localized: impl AsRef<str>) -> Option<Self> {
        let primary = primary.as_ref().trim();
        let localized = localized.as_ref().trim();
        if primary.is_empty() || localized.is_empty() {
            return None;
        }
        Some(Self {
            primary: primary.to_string(),
            localized: localized.to_string(),
        })
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn localized(&self) -> &str {
        &self.localized
    }

    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Primary => &self.primary,
            Side::Localized => &self.localized,
        }
    }

    /// Lowercases both labels.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        Self {
            primary: self.primary.to_lowercase(),
            localized: self.localized.to_lowercase(),
        }
    }

    /// Replaces the localized label, keeping the primary one.
    ///
    /// Returns `None` when the new label is blank.
    #[must_use]
    pub fn with_localized(&self, localized: impl AsRef<str>) -> Option<Self> {
        Self::new(&self.primary, localized)
    }
}

/// Logical connective between terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    /// The wire literal (`"and"` / `"or"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }

    /// Latin connective used between species names.
    pub fn latin_connective(&self) -> &'static str {
        match self {
            Operator::And => "et",
            Operator::Or => "vel",
        }
    }

    /// Chinese connective glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::And => "与",
            Operator::Or => "或",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    /// Parses an operator keyword, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            _ => Err(format!("Unknown logic operator: {s}")),
        }
    }
}
