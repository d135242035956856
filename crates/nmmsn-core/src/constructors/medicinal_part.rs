//! Medicinal part: the anatomical part a material is made from.

use nmmsn_model::{NamingWarning, NeeItem, Result, Side};

use super::{ElementConstructor, ElementFragment};
use crate::diagnostic::{Diagnostic, Pipe};
use crate::expression::Expression;

#[derive(Debug, Clone, Copy, Default)]
pub struct MedicinalPart;

impl ElementConstructor for MedicinalPart {
    fn pipe(&self) -> Pipe {
        Pipe::MedicinalPart
    }

    fn construct(
        &self,
        items: &[NeeItem],
        diagnostic: &mut Diagnostic,
    ) -> Result<ElementFragment> {
        let expression = Expression::parse(items)?.to_lowercase();
        expression.require_non_empty()?;
        expression.require_bijective_terms()?;

        let canonical = expression.canonicalize(Side::Primary, false);
        let (primary, localized) = canonical.render_bilingual(false, false);
        if canonical.term_count() > 1 {
            diagnostic.warn(self.pipe(), NamingWarning::MultipleMedicinalParts);
        }
        Ok(ElementFragment {
            primary,
            localized,
            canonical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmmsn_model::NamingError;

    #[test]
    fn orders_alternatives_and_conjunctions() {
        let items = vec![
            NeeItem::term("root", "根"),
            NeeItem::and(),
            NeeItem::term("rhizome", "根茎"),
            NeeItem::or(),
            NeeItem::term("herbaceous stem", "草质茎"),
        ];
        let mut diagnostic = Diagnostic::new();
        let fragment = MedicinalPart.construct(&items, &mut diagnostic).unwrap();
        assert_eq!(fragment.primary, "Herbaceous-stem or Rhizome and Root");
        assert_eq!(fragment.localized, "草质茎或根茎与根");
        assert_eq!(
            fragment.canonical.to_string(),
            "herbaceous stem | 草质茎 or rhizome | 根茎 and root | 根"
        );
        assert_eq!(diagnostic.warning_count(), 1);
    }

    #[test]
    fn case_variants_are_one_part() {
        let items = vec![NeeItem::term("Root", "根"), NeeItem::or(), NeeItem::term("ROOT", "根")];
        let mut diagnostic = Diagnostic::new();
        let fragment = MedicinalPart.construct(&items, &mut diagnostic).unwrap();
        assert_eq!(fragment.primary, "Root");
        assert!(diagnostic.is_empty());
    }

    #[test]
    fn requires_a_part() {
        let mut diagnostic = Diagnostic::new();
        assert_eq!(
            MedicinalPart.construct(&[], &mut diagnostic),
            Err(NamingError::EmptyExpression)
        );
        let ambiguous = vec![NeeItem::term("root", "根"), NeeItem::or(), NeeItem::term("radix", "根")];
        assert_eq!(
            MedicinalPart.construct(&ambiguous, &mut diagnostic),
            Err(NamingError::NonBijectiveTerms)
        );
    }
}
