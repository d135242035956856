//! Response documents returned for a naming request.

use serde::{Deserialize, Serialize};

use crate::record::NameElementRecord;

/// A message in English and Chinese.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnZh {
    pub en: String,
    pub zh: String,
}

/// Chinese name with its pinyin reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NmmsnZh {
    pub zh: String,
    pub pinyin: String,
}

/// The constructed standard name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nmmsn {
    /// Latin/English name.
    pub nmmsn: String,
    pub nmmsn_zh: NmmsnZh,
    /// Canonicalized name elements echoed back.
    pub nmmsn_name_element: NameElementRecord,
    /// Rendered (primary, localized) fragments in origin, part, description,
    /// method order.
    pub nmmsn_seq: Vec<[String; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingSuccess {
    pub success: bool,
    pub error_msg: String,
    pub error_msg_en_zh: EnZh,
    pub nmmsn: Nmmsn,
}

impl NamingSuccess {
    pub fn new(error_msg: String, error_msg_en_zh: EnZh, nmmsn: Nmmsn) -> Self {
        Self {
            success: true,
            error_msg,
            error_msg_en_zh,
            nmmsn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingFailure {
    pub success: bool,
    pub error_msg: String,
    pub error_msg_en_zh: EnZh,
}

impl NamingFailure {
    pub fn new(error_msg: String, error_msg_en_zh: EnZh) -> Self {
        Self {
            success: false,
            error_msg,
            error_msg_en_zh,
        }
    }
}

/// Either response shape. Serializes without a tag, exactly as one of the
/// two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NamingResponse {
    Success(NamingSuccess),
    Failure(NamingFailure),
}

impl NamingResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, NamingResponse::Success(_))
    }

    pub fn error_msg(&self) -> &str {
        match self {
            NamingResponse::Success(success) => &success.error_msg,
            NamingResponse::Failure(failure) => &failure.error_msg,
        }
    }

    pub fn error_msg_en_zh(&self) -> &EnZh {
        match self {
            NamingResponse::Success(success) => &success.error_msg_en_zh,
            NamingResponse::Failure(failure) => &failure.error_msg_en_zh,
        }
    }
}
