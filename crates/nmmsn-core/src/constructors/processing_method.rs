//! Processing method: how a processed material was prepared.
//!
//! AND sequences keep their order because the order of processing steps is
//! meaningful. The Chinese fragment lists the last step first and omits the
//! AND connective.

use nmmsn_model::{NamingWarning, NeeItem, Operator, Result, Side};

use super::{ElementConstructor, ElementFragment};
use crate::diagnostic::{Diagnostic, Pipe};
use crate::expression::Expression;

/// Marker ending the Chinese name of a processing method.
pub const PROCESSING_SUFFIX: char = '制';

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessingMethod;

impl ElementConstructor for ProcessingMethod {
    fn pipe(&self) -> Pipe {
        Pipe::ProcessingMethod
    }

    fn construct(
        &self,
        items: &[NeeItem],
        diagnostic: &mut Diagnostic,
    ) -> Result<ElementFragment> {
        let expression = Expression::parse(items)?.to_lowercase();
        expression.require_bijective_terms()?;

        let canonical = expression.canonicalize(Side::Primary, true);
        let (primary, localized) = canonical.render_bilingual(true, true);

        if !canonical
            .relation()?
            .values()
            .all(|label| label.ends_with(PROCESSING_SUFFIX))
        {
            diagnostic.warn(self.pipe(), NamingWarning::ProcessingSuffixMissing);
        }
        if canonical.operators().contains(&Operator::Or) {
            diagnostic.warn(self.pipe(), NamingWarning::AmbiguousProcessingOrder);
        }
        Ok(ElementFragment {
            primary,
            localized,
            canonical,
        })
    }
}
