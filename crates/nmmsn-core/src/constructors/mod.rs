//! Element constructors.
//!
//! Each constructor turns one name-element list of a record into a rendered
//! name fragment in both languages plus the canonical expression echoed in
//! the response. Hard failures are returned as errors; business-rule
//! concerns are recorded as warnings in the threaded [`Diagnostic`].

mod medicinal_part;
mod processing_method;
mod special_description;
mod species_origin;

pub use medicinal_part::MedicinalPart;
pub use processing_method::ProcessingMethod;
pub use special_description::SpecialDescription;
pub use species_origin::SpeciesOrigin;

use nmmsn_model::{NeeItem, Result};

use crate::diagnostic::{Diagnostic, Pipe};
use crate::expression::Expression;

/// A rendered name fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementFragment {
    /// Latin/English fragment.
    pub primary: String,
    /// Chinese fragment.
    pub localized: String,
    /// The expression the fragment was rendered from.
    pub canonical: Expression,
}

impl ElementFragment {
    pub fn pair(&self) -> [String; 2] {
        [self.primary.clone(), self.localized.clone()]
    }
}

/// Builds one fragment of a name.
pub trait ElementConstructor {
    /// Pipe under which diagnostics are recorded.
    fn pipe(&self) -> Pipe;

    fn construct(&self, items: &[NeeItem], diagnostic: &mut Diagnostic)
    -> Result<ElementFragment>;
}
