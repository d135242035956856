//! Naming engine for natural medicinal materials.
//!
//! A request is a [`NameElementRecord`](nmmsn_model::NameElementRecord): a
//! category plus four name-element lists. Each list is parsed into an
//! [`Expression`], validated, canonicalized and rendered by its
//! [`ElementConstructor`]; [`construct_name`] runs all four and assembles the
//! bilingual name, and [`respond`] turns the outcome into a response document.

pub mod constructors;
pub mod diagnostic;
pub mod expression;
pub mod pipeline;
pub mod relation;
pub mod response;

pub use constructors::{
    ElementConstructor, ElementFragment, MedicinalPart, ProcessingMethod, SpecialDescription,
    SpeciesOrigin,
};
pub use diagnostic::{Diagnostic, DiagnosticLine, Pipe, Status};
pub use expression::{Element, Expression};
pub use pipeline::{Construction, NamedMaterial, construct_name};
pub use relation::{Relation, RelationKind};
pub use response::{request_failure, respond};
