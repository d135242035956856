//! Request document: the name-element record.

use serde::{Deserialize, Serialize};

use crate::term::{Operator, Term};

/// One element of a name-element list as it appears on the wire.
///
/// A term is a JSON array of strings and an operator is a bare string. Any
/// array length and any string are accepted here; arity and keyword errors
/// are reported when the list is parsed into an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NeeItem {
    Term(Vec<String>),
    Operator(String),
}

impl NeeItem {
    pub fn term(primary: impl Into<String>, localized: impl Into<String>) -> Self {
        NeeItem::Term(vec![primary.into(), localized.into()])
    }

    pub fn and() -> Self {
        NeeItem::Operator(Operator::And.as_str().to_string())
    }

    pub fn or() -> Self {
        NeeItem::Operator(Operator::Or.as_str().to_string())
    }
}

impl From<&Term> for NeeItem {
    fn from(term: &Term) -> Self {
        NeeItem::term(term.primary(), term.localized())
    }
}

impl From<Operator> for NeeItem {
    fn from(operator: Operator) -> Self {
        NeeItem::Operator(operator.as_str().to_string())
    }
}

/// Input of a naming request: a category and four name-element lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameElementRecord {
    pub nmm_type: String,
    pub species_origins: Vec<NeeItem>,
    pub medicinal_parts: Vec<NeeItem>,
    pub special_descriptions: Vec<NeeItem>,
    pub processing_methods: Vec<NeeItem>,
}
