//! Name construction for a whole record.

use std::time::Instant;

use nmmsn_model::{NameElementRecord, NamingError, NamingWarning, NeeItem, NmmCategory};
use nmmsn_normalization::collapse_whitespace;
use tracing::{debug, info, info_span};

use crate::constructors::{
    ElementConstructor, ElementFragment, MedicinalPart, ProcessingMethod, SpecialDescription,
    SpeciesOrigin,
};
use crate::diagnostic::{Diagnostic, Pipe};

/// Outcome of [`construct_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Construction {
    Named(Box<NamedMaterial>),
    /// At least one line of the diagnostic has the failed status.
    Failed(Diagnostic),
}

impl Construction {
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            Construction::Named(named) => &named.diagnostic,
            Construction::Failed(diagnostic) => diagnostic,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Construction::Named(_))
    }
}

/// A successfully named material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMaterial {
    /// Normalized category literal, echoed even when unrecognized.
    pub nmm_type: String,
    pub category: Option<NmmCategory>,
    /// `{origin} {part} {description} {method}`.
    pub name: String,
    /// `{method}{description}{origin}{part}`.
    pub localized_name: String,
    pub species_origin: ElementFragment,
    pub medicinal_part: ElementFragment,
    pub special_description: ElementFragment,
    pub processing_method: ElementFragment,
    /// Warnings only.
    pub diagnostic: Diagnostic,
}

impl NamedMaterial {
    /// Fragment pairs in origin, part, description, method order.
    pub fn fragment_pairs(&self) -> Vec<[String; 2]> {
        [
            &self.species_origin,
            &self.medicinal_part,
            &self.special_description,
            &self.processing_method,
        ]
        .iter()
        .map(|fragment| fragment.pair())
        .collect()
    }

    /// The canonical name elements, as echoed in the response.
    pub fn name_elements(&self) -> NameElementRecord {
        NameElementRecord {
            nmm_type: self.nmm_type.clone(),
            species_origins: self.species_origin.canonical.to_items(),
            medicinal_parts: self.medicinal_part.canonical.to_items(),
            special_descriptions: self.special_description.canonical.to_items(),
            processing_methods: self.processing_method.canonical.to_items(),
        }
    }
}

/// Builds the bilingual name of a record.
///
/// All four constructors run even when an earlier one fails, so the
/// diagnostic reports every problem of the record at once.
pub fn construct_name(record: &NameElementRecord) -> Construction {
    let nmm_type = NmmCategory::normalize_literal(&record.nmm_type);
    let span = info_span!("construct_name", nmm_type = %nmm_type);
    let _guard = span.enter();
    let start = Instant::now();

    let mut diagnostic = Diagnostic::new();
    let category = nmm_type.parse::<NmmCategory>().ok();
    match category {
        None => diagnostic.warn(Pipe::Orchestrator, NamingWarning::InvalidCategory),
        Some(category) if !category.is_processable() => {
            diagnostic.warn(Pipe::Orchestrator, NamingWarning::CategoryNotNameable);
        }
        Some(_) => {}
    }
    let processed = category.is_some_and(|category| category.is_processed());
    if !processed && !record.processing_methods.is_empty() {
        diagnostic.fail(Pipe::Orchestrator, &NamingError::UnexpectedProcessingMethods);
    }

    let species_origin = run(&SpeciesOrigin, &record.species_origins, &mut diagnostic);
    let medicinal_part = run(&MedicinalPart, &record.medicinal_parts, &mut diagnostic);
    let special_description = run(
        &SpecialDescription,
        &record.special_descriptions,
        &mut diagnostic,
    );
    let processing_method = run(
        &ProcessingMethod,
        &record.processing_methods,
        &mut diagnostic,
    );

    let (
        Some(species_origin),
        Some(medicinal_part),
        Some(special_description),
        Some(processing_method),
    ) = (
        species_origin,
        medicinal_part,
        special_description,
        processing_method,
    )
    else {
        info!(
            failures = diagnostic.lines().len() - diagnostic.warning_count(),
            duration_ms = start.elapsed().as_millis(),
            "name construction failed"
        );
        return Construction::Failed(diagnostic);
    };
    if diagnostic.is_failed() {
        info!(
            duration_ms = start.elapsed().as_millis(),
            "name construction failed"
        );
        return Construction::Failed(diagnostic);
    }

    let name = collapse_whitespace(&format!(
        "{} {} {} {}",
        species_origin.primary,
        medicinal_part.primary,
        special_description.primary,
        processing_method.primary
    ));
    let localized_name = format!(
        "{}{}{}{}",
        processing_method.localized,
        special_description.localized,
        species_origin.localized,
        medicinal_part.localized
    );
    debug!(
        name = %name,
        localized_name = %localized_name,
        warnings = diagnostic.warning_count(),
        duration_ms = start.elapsed().as_millis(),
        "name constructed"
    );

    Construction::Named(Box::new(NamedMaterial {
        nmm_type,
        category,
        name,
        localized_name,
        species_origin,
        medicinal_part,
        special_description,
        processing_method,
        diagnostic,
    }))
}

fn run(
    constructor: &dyn ElementConstructor,
    items: &[NeeItem],
    diagnostic: &mut Diagnostic,
) -> Option<ElementFragment> {
    let pipe = constructor.pipe();
    info_span!("element", pipe = %pipe).in_scope(|| {
        match constructor.construct(items, diagnostic) {
            Ok(fragment) => {
                debug!(
                    primary = %fragment.primary,
                    localized = %fragment.localized,
                    "element constructed"
                );
                Some(fragment)
            }
            Err(error) => {
                info!(%error, "element rejected");
                diagnostic.fail(pipe, &error);
                None
            }
        }
    })
}
