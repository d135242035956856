//! Error and warning kinds raised while constructing a name.
//!
//! Hard errors ([`NamingError`]) abort the element constructor that raised
//! them. Warnings ([`NamingWarning`]) are recorded in the diagnostic and never
//! abort anything.
//!
//! Every message is a complete English sentence ending in a full stop. The
//! message text doubles as the lookup key of the message catalog, so changing
//! a message requires changing the catalog entry as well.

use std::fmt;

use thiserror::Error;

/// Hard failures of expression parsing, validation and name construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// The sequence violates the term/operator alternation rules.
    #[error("{0}")]
    MalformedExpression(Malformation),

    /// An element is neither a two-sided term nor a known operator.
    #[error("{0}")]
    InvalidElement(InvalidElement),

    /// The expression holds no term where at least one is required.
    #[error("The name element list is empty.")]
    EmptyExpression,

    /// Both AND and OR appear where only one kind is allowed.
    #[error(
        "There are both \"and\" and \"or\" logic operators in the input data, only one of them is allowed."
    )]
    MixedOperators,

    /// The terms do not form a one-to-one relation.
    #[error("The mapping type is not one-to-one.")]
    NonBijectiveTerms,

    /// A relation pair has an empty key or value.
    #[error("Mapping item cannot be empty.")]
    InvalidRelation,

    /// A lookup was requested in a direction where values are not unique.
    #[error("{0}")]
    AmbiguousRelation(MappingDirection),

    /// Duplicate detection was requested on a relation that is not many-to-one.
    #[error("The mapping is not in the type of multi-to-one.")]
    NotManyToOne,

    /// Processing methods were supplied for a material that is not processed.
    #[error("Processing methods detected in non-processed NMM.")]
    UnexpectedProcessingMethods,
}

/// Alternation rule broken by a malformed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// The first or the last element is an operator.
    OperatorAtBoundary,
    /// The sequence has an even number of elements.
    EvenLength,
    /// Two terms or two operators are adjacent.
    BrokenAlternation,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Malformation::OperatorAtBoundary => {
                "The first and the last item could not be logic operators."
            }
            Malformation::EvenLength => "The length of the list should be odd.",
            Malformation::BrokenAlternation => {
                "The input data pattern is not term, logic operator, term, logic operator, term."
            }
        };
        f.write_str(message)
    }
}

/// Reason an individual element was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidElement {
    /// A term does not hold exactly two strings.
    TermArity,
    /// A bare string is not `and` or `or`.
    UnknownOperator,
}

impl fmt::Display for InvalidElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            InvalidElement::TermArity => "The length of the inner list is not 2.",
            InvalidElement::UnknownOperator => {
                "The str in the input data is empty or not in the available logic operator list."
            }
        };
        f.write_str(message)
    }
}

/// Direction of a relation lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingDirection {
    /// Key to value.
    Forward,
    /// Value to key.
    Backward,
}

impl fmt::Display for MappingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            MappingDirection::Forward => {
                "The mapping is not in the types of one-to-one or multi-to-one."
            }
            MappingDirection::Backward => {
                "The mapping is not in the types of one-to-one or one-to-multi."
            }
        };
        f.write_str(message)
    }
}

/// Business-rule concerns. Recorded, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum NamingWarning {
    /// The category literal is not one of the recognized tags.
    InvalidCategory,
    /// The category is recognized but outside the automatically nameable set.
    CategoryNotNameable,
    /// A species identifier was dropped because a broader one is present.
    SpeciesInclusionDetected,
    /// More than one species origin survived inclusion detection.
    MultipleSpeciesOrigins,
    /// More than one medicinal part is named.
    MultipleMedicinalParts,
    /// More than one special description is named.
    MultipleSpecialDescriptions,
    /// A processing method's localized label lacks the processing marker.
    ProcessingSuffixMissing,
    /// Alternative processing sequences were given with OR.
    AmbiguousProcessingOrder,
}

impl NamingWarning {
    pub const ALL: [NamingWarning; 8] = [
        NamingWarning::InvalidCategory,
        NamingWarning::CategoryNotNameable,
        NamingWarning::SpeciesInclusionDetected,
        NamingWarning::MultipleSpeciesOrigins,
        NamingWarning::MultipleMedicinalParts,
        NamingWarning::MultipleSpecialDescriptions,
        NamingWarning::ProcessingSuffixMissing,
        NamingWarning::AmbiguousProcessingOrder,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            NamingWarning::InvalidCategory => "Invalid NMM type.",
            NamingWarning::CategoryNotNameable => "NMM type cannot be named automatically.",
            NamingWarning::SpeciesInclusionDetected => "Species inclusion detected.",
            NamingWarning::MultipleSpeciesOrigins => "Multiple species origins detected.",
            NamingWarning::MultipleMedicinalParts => "Multiple medicinal parts detected.",
            NamingWarning::MultipleSpecialDescriptions => {
                "Multiple special descriptions detected."
            }
            NamingWarning::ProcessingSuffixMissing => {
                "Not all processing methods end with \"制\"."
            }
            NamingWarning::AmbiguousProcessingOrder => {
                "Multiple processing methods with \"or\" logic detected."
            }
        }
    }
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub type Result<T> = std::result::Result<T, NamingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_end_with_full_stop() {
        let errors = [
            NamingError::MalformedExpression(Malformation::OperatorAtBoundary),
            NamingError::MalformedExpression(Malformation::EvenLength),
            NamingError::MalformedExpression(Malformation::BrokenAlternation),
            NamingError::InvalidElement(InvalidElement::TermArity),
            NamingError::InvalidElement(InvalidElement::UnknownOperator),
            NamingError::EmptyExpression,
            NamingError::MixedOperators,
            NamingError::NonBijectiveTerms,
            NamingError::InvalidRelation,
            NamingError::AmbiguousRelation(MappingDirection::Forward),
            NamingError::AmbiguousRelation(MappingDirection::Backward),
            NamingError::NotManyToOne,
            NamingError::UnexpectedProcessingMethods,
        ];
        for error in errors {
            assert!(error.to_string().ends_with('.'), "{error}");
        }
        for warning in NamingWarning::ALL {
            assert!(warning.message().ends_with('.'), "{warning}");
        }
        assert_eq!(
            NamingWarning::MultipleSpeciesOrigins.to_string(),
            "Multiple species origins detected."
        );
    }
}
