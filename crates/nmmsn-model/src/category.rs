//! Natural medicinal material categories.
//!
//! The category decides which name elements a record may carry:
//!
//! - **PAFA** (plant, animal, fungal, algal): named from species origin and
//!   medicinal part.
//! - **Processed**: a PAFA material after processing; the only category that
//!   may list processing methods.
//! - Mineral, other, processed-other, chemical and artificial materials are
//!   recognized but cannot be named automatically.

use std::fmt;
use std::str::FromStr;

/// Category of a natural medicinal material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NmmCategory {
    Plant,
    Animal,
    Fungal,
    Algal,
    Mineral,
    Other,
    Processed,
    /// A mineral or other material after processing.
    ProcessedOther,
    Chemical,
    Artificial,
}

impl NmmCategory {
    pub const ALL: [NmmCategory; 10] = [
        NmmCategory::Plant,
        NmmCategory::Animal,
        NmmCategory::Fungal,
        NmmCategory::Algal,
        NmmCategory::Mineral,
        NmmCategory::Other,
        NmmCategory::Processed,
        NmmCategory::ProcessedOther,
        NmmCategory::Chemical,
        NmmCategory::Artificial,
    ];

    /// Returns the canonical tag as it appears in request documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            NmmCategory::Plant => "plant",
            NmmCategory::Animal => "animal",
            NmmCategory::Fungal => "fungal",
            NmmCategory::Algal => "algal",
            NmmCategory::Mineral => "mineral",
            NmmCategory::Other => "other",
            NmmCategory::Processed => "processed",
            NmmCategory::ProcessedOther => "processed_other",
            NmmCategory::Chemical => "chemical",
            NmmCategory::Artificial => "artificial",
        }
    }

    /// Returns the Chinese label of the category.
    pub fn label_zh(&self) -> &'static str {
        match self {
            NmmCategory::Plant => "植物药",
            NmmCategory::Animal => "动物药",
            NmmCategory::Fungal => "真菌药",
            NmmCategory::Algal => "藻类药",
            NmmCategory::Mineral => "矿物药",
            NmmCategory::Other => "其他药",
            NmmCategory::Processed => "炮制药",
            NmmCategory::ProcessedOther => "其他炮制药",
            NmmCategory::Chemical => "化物药",
            NmmCategory::Artificial => "人工药",
        }
    }

    /// Plant, animal, fungal or algal.
    pub fn is_pafa(&self) -> bool {
        matches!(
            self,
            NmmCategory::Plant | NmmCategory::Animal | NmmCategory::Fungal | NmmCategory::Algal
        )
    }

    pub fn is_processed(&self) -> bool {
        matches!(self, NmmCategory::Processed)
    }

    /// PAFA or processed: the categories the engine can name.
    pub fn is_processable(&self) -> bool {
        self.is_pafa() || self.is_processed()
    }

    /// Normalizes a raw category literal: trim, lowercase, `-` to `_`.
    pub fn normalize_literal(raw: &str) -> String {
        raw.trim().to_lowercase().replace('-', "_")
    }
}

impl fmt::Display for NmmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NmmCategory {
    type Err = String;

    /// Parses an English tag (`"Processed-Other"` works) or a Chinese label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = Self::normalize_literal(s);
        Self::ALL
            .into_iter()
            .find(|category| {
                category.as_str() == normalized || category.label_zh() == normalized
            })
            .ok_or_else(|| format!("Unknown NMM type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_and_labels() {
        assert_eq!("plant".parse::<NmmCategory>(), Ok(NmmCategory::Plant));
        assert_eq!(
            " Processed-Other ".parse::<NmmCategory>(),
            Ok(NmmCategory::ProcessedOther)
        );
        assert_eq!("炮制药".parse::<NmmCategory>(), Ok(NmmCategory::Processed));
        assert!("vegetable".parse::<NmmCategory>().is_err());
    }

    #[test]
    fn groupings() {
        let processable: Vec<_> = NmmCategory::ALL
            .into_iter()
            .filter(NmmCategory::is_processable)
            .collect();
        assert_eq!(
            processable,
            vec![
                NmmCategory::Plant,
                NmmCategory::Animal,
                NmmCategory::Fungal,
                NmmCategory::Algal,
                NmmCategory::Processed,
            ]
        );
        assert!(!NmmCategory::Processed.is_pafa());
        assert!(!NmmCategory::ProcessedOther.is_processed());
    }
}
