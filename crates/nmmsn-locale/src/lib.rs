//! Localization for NMMSN responses.
//!
//! - [`Catalog`] translates diagnostic messages into Chinese.
//! - [`Transliterator`] reads a Chinese name aloud; [`PinyinTransliterator`]
//!   is the shipped implementation.

pub mod catalog;
pub mod error;
pub mod transliterate;

pub use catalog::{Catalog, EMBEDDED_ZH, Language};
pub use error::{LocaleError, TransliterationError};
pub use transliterate::{PinyinTransliterator, Transliterator};
