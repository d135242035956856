//! Special description: qualifiers such as fresh or dried.

use nmmsn_model::{NamingWarning, NeeItem, Result, Side};

use super::{ElementConstructor, ElementFragment};
use crate::diagnostic::{Diagnostic, Pipe};
use crate::expression::Expression;

/// Optional element; an empty list renders as empty fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialDescription;

impl ElementConstructor for SpecialDescription {
    fn pipe(&self) -> Pipe {
        Pipe::SpecialDescription
    }

    fn construct(
        &self,
        items: &[NeeItem],
        diagnostic: &mut Diagnostic,
    ) -> Result<ElementFragment> {
        let expression = Expression::parse(items)?.to_lowercase();
        expression.require_bijective_terms()?;

        let canonical = expression.canonicalize(Side::Primary, false);
        let (primary, localized) = canonical.render_bilingual(true, false);
        if canonical.term_count() > 1 {
            diagnostic.warn(self.pipe(), NamingWarning::MultipleSpecialDescriptions);
        }
        Ok(ElementFragment {
            primary,
            localized,
            canonical,
        })
    }
}
