//! Response documents.

use nmmsn_locale::{Catalog, Language, TransliterationError, Transliterator};
use nmmsn_model::{
    EnZh, NameElementRecord, NamingFailure, NamingResponse, NamingSuccess, Nmmsn, NmmsnZh,
};
use tracing::warn;

use crate::pipeline::{Construction, construct_name};

/// Names a record and builds the response document.
///
/// The diagnostic is localized through `catalog`; the localized name is read
/// aloud by `transliterator`, whose failure is returned as an error.
pub fn respond(
    record: &NameElementRecord,
    catalog: &Catalog,
    transliterator: &dyn Transliterator,
) -> Result<NamingResponse, TransliterationError> {
    match construct_name(record) {
        Construction::Failed(diagnostic) => {
            let error_msg = diagnostic.to_string();
            let error_msg_en_zh = catalog.localize_diagnostic(&error_msg);
            Ok(NamingResponse::Failure(NamingFailure::new(
                error_msg,
                error_msg_en_zh,
            )))
        }
        Construction::Named(named) => {
            let pinyin = transliterator.transliterate(&named.localized_name)?;
            let error_msg = named.diagnostic.to_string();
            let error_msg_en_zh = catalog.localize_diagnostic(&error_msg);
            let nmmsn = Nmmsn {
                nmmsn: named.name.clone(),
                nmmsn_zh: NmmsnZh {
                    zh: named.localized_name.clone(),
                    pinyin,
                },
                nmmsn_name_element: named.name_elements(),
                nmmsn_seq: named.fragment_pairs(),
            };
            Ok(NamingResponse::Success(NamingSuccess::new(
                error_msg,
                error_msg_en_zh,
                nmmsn,
            )))
        }
    }
}

/// Failure document for a request that could not be read as a record.
pub fn request_failure(message: &str, catalog: &Catalog) -> NamingResponse {
    warn!(%message, "rejected request");
    NamingResponse::Failure(NamingFailure::new(
        message.to_string(),
        EnZh {
            en: message.to_string(),
            zh: catalog.translate(message, Language::Zh).to_string(),
        },
    ))
}
