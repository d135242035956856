//! String normalization for name construction.
//!
//! - [`text`]: character filtering, whitespace handling and capitalization
//!   applied to rendered name fragments.
//! - [`species`]: detection of species identifiers that are included in
//!   (prefixed by) a broader identifier of the same list.

pub mod species;
pub mod text;

pub use species::{SpeciesInclusion, detect_species_inclusion};
pub use text::{
    CharPolicy, capitalize, collapse_whitespace, conforms, disallowed_chars, filter_chars,
    remove_bracket_punctuation, remove_whitespace,
};
