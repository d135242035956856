//! Species-inclusion detection.
//!
//! A species identifier "includes" another when it is a case-insensitive
//! prefix of it: `Ephedra` includes `Ephedra sinica`, and `Prinsepia uniflora`
//! includes `Prinsepia uniflora var. serrata`. Only the broadest identifiers
//! are kept.

use tracing::debug;

use crate::text::collapse_whitespace;

/// Outcome of [`detect_species_inclusion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesInclusion {
    /// Whether at least one identifier was dropped.
    pub inclusion_detected: bool,
    /// Surviving identifiers, whitespace-normalized, in alphabetical order.
    pub kept: Vec<String>,
}

/// Keeps only identifiers not prefixed by a shorter kept identifier.
///
/// ```
/// use nmmsn_normalization::detect_species_inclusion;
///
/// let result = detect_species_inclusion(&[
///     "Prinsepia uniflora",
///     "Prinsepia uniflora var. serrata",
/// ]);
/// assert!(result.inclusion_detected);
/// assert_eq!(result.kept, vec!["Prinsepia uniflora".to_string()]);
/// ```
pub fn detect_species_inclusion<S: AsRef<str>>(identifiers: &[S]) -> SpeciesInclusion {
    let mut candidates: Vec<String> = identifiers
        .iter()
        .map(|identifier| collapse_whitespace(identifier.as_ref()))
        .collect();
    candidates.sort_by_key(|candidate| candidate.chars().count());

    let mut kept: Vec<String> = Vec::with_capacity(candidates.len());
    let mut kept_lower: Vec<String> = Vec::with_capacity(candidates.len());
    let mut inclusion_detected = false;
    for candidate in candidates {
        let lower = candidate.to_lowercase();
        if let Some(broader) = kept_lower.iter().position(|k| lower.starts_with(k.as_str())) {
            debug!(
                included = %candidate,
                broader = %kept[broader],
                "species identifier included in a broader one"
            );
            inclusion_detected = true;
        } else {
            kept_lower.push(lower);
            kept.push(candidate);
        }
    }
    kept.sort();

    SpeciesInclusion {
        inclusion_detected,
        kept,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variety_is_included_in_species() {
        let result = detect_species_inclusion(&[
            "Prinsepia uniflora var. serrata",
            "Prinsepia uniflora",
        ]);
        assert!(result.inclusion_detected);
        assert_eq!(result.kept, vec!["Prinsepia uniflora"]);
    }

    #[test]
    fn unrelated_species_are_sorted() {
        let result = detect_species_inclusion(&["Prinsepia utilis", "Prinsepia uniflora"]);
        assert!(!result.inclusion_detected);
        assert_eq!(result.kept, vec!["Prinsepia uniflora", "Prinsepia utilis"]);
    }

    #[test]
    fn prefix_match_ignores_case_and_spacing() {
        let result = detect_species_inclusion(&["  ephedra  ", "Ephedra   sinica"]);
        assert!(result.inclusion_detected);
        assert_eq!(result.kept, vec!["ephedra"]);
    }

    #[test]
    fn empty_input() {
        let result = detect_species_inclusion::<&str>(&[]);
        assert!(!result.inclusion_detected);
        assert!(result.kept.is_empty());
    }
}
