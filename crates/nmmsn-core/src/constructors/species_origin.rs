//! Species origin: the taxa a material is obtained from.
//!
//! The Latin fragment elides repeated genera, so
//! `Ephedra sinica or Ephedra intermedia` renders as
//! `Ephedra intermedia vel sinica`.

use nmmsn_model::{NamingWarning, NeeItem, Operator, Result, Side, Term};
use nmmsn_normalization::{CharPolicy, detect_species_inclusion, filter_chars, remove_whitespace};
use tracing::debug;

use super::{ElementConstructor, ElementFragment};
use crate::diagnostic::{Diagnostic, Pipe};
use crate::expression::Expression;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpeciesOrigin;

impl ElementConstructor for SpeciesOrigin {
    fn pipe(&self) -> Pipe {
        Pipe::SpeciesOrigin
    }

    fn construct(
        &self,
        items: &[NeeItem],
        diagnostic: &mut Diagnostic,
    ) -> Result<ElementFragment> {
        let expression = Expression::parse(items)?;
        expression.require_non_empty()?;
        expression.require_single_operator_kind()?;
        expression.require_bijective_terms()?;

        let canonical = expression.canonicalize(Side::Primary, false);
        let operator = canonical.first_operator();
        let relation = canonical.relation()?;
        let localized_by_primary = canonical.localized_by_primary();

        let inclusion = detect_species_inclusion(&relation.keys().collect::<Vec<_>>());
        if inclusion.inclusion_detected {
            diagnostic.warn(self.pipe(), NamingWarning::SpeciesInclusionDetected);
        }
        if inclusion.kept.len() > 1 {
            diagnostic.warn(self.pipe(), NamingWarning::MultipleSpeciesOrigins);
        }

        let survivors: Vec<(&str, &str)> = inclusion
            .kept
            .iter()
            .filter_map(|species| {
                localized_by_primary
                    .get(species)
                    .map(|localized| (species.as_str(), localized.as_str()))
            })
            .collect();
        debug!(
            species = survivors.len(),
            dropped = relation.len() - survivors.len(),
            "species origins resolved"
        );

        let primary = elide_genera(survivors.iter().map(|(species, _)| *species), operator);
        let primary = filter_chars(&primary, CharPolicy::AlphabeticHyphenSpace, "");

        let glyph = operator.map_or("", |operator| operator.glyph());
        let localized = survivors
            .iter()
            .map(|(_, localized)| *localized)
            .collect::<Vec<_>>()
            .join(glyph);
        let localized = remove_whitespace(&filter_chars(
            &localized,
            CharPolicy::AlphabeticHyphenSpace,
            "",
        ));

        let echoed = Expression::joined(
            survivors
                .iter()
                .filter_map(|(species, localized)| Term::new(species, remove_whitespace(localized))),
            operator.unwrap_or(Operator::And),
        );

        Ok(ElementFragment {
            primary,
            localized,
            canonical: echoed,
        })
    }
}

/// Joins species identifiers with the Latin connective of `operator`,
/// writing a genus only when it differs from the previous identifier's.
///
/// A single-word identifier (a bare genus) is always written in full.
fn elide_genera<'a>(species: impl Iterator<Item = &'a str>, operator: Option<Operator>) -> String {
    let connective = operator.map_or("", |operator| operator.latin_connective());
    let mut words: Vec<String> = Vec::new();
    let mut previous_genus: Option<&str> = None;
    for identifier in species {
        let mut parts = identifier.split_whitespace();
        let genus = parts.next().unwrap_or_default();
        let epithet = parts.collect::<Vec<_>>().join(" ");
        if previous_genus == Some(genus) && !epithet.is_empty() {
            words.push(format!("{connective} {epithet}"));
        } else {
            if previous_genus.is_some() {
                words.push(connective.to_string());
            }
            words.push(identifier.to_string());
        }
        previous_genus = Some(genus);
    }
    words.join(" ")
}
