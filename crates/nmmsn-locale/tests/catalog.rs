#![allow(missing_docs)]

use insta::assert_snapshot;
use nmmsn_locale::{Catalog, Language};
use nmmsn_model::{
    EnZh, InvalidElement, Malformation, MappingDirection, NamingError, NamingWarning,
};

#[test]
fn every_message_has_a_translation() {
    let catalog = Catalog::embedded();
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
        assert!(catalog.contains(&error.to_string()), "missing: {error}");
    }
    for warning in NamingWarning::ALL {
        assert!(catalog.contains(warning.message()), "missing: {warning}");
    }
}

#[test]
fn localizes_structured_diagnostic() {
    let catalog = Catalog::embedded();
    let diagnostic = "Pipe: construct_nmmsn_spe_ori. Status: warning. Reason: Multiple species origins detected.\n\
                      Pipe: construct_nmmsn_med_par. Status: warning. Reason: Multiple medicinal parts detected.\n\
                      \n\
                      Pipe: construct_nmmsn_spe_des. Status: warning. Reason: Multiple special descriptions detected.";
    let localized = catalog.localize_diagnostic(diagnostic);
    assert_snapshot!(localized.en, @r"
    Multiple species origins detected.
    Multiple medicinal parts detected.
    Multiple special descriptions detected.
    ");
    assert_eq!(
        localized.zh,
        "检测到多个物种基源。\n检测到多个药用部位。\n检测到多个特殊描述。"
    );
}

#[test]
fn unknown_and_unstructured_lines_pass_through() {
    let catalog = Catalog::embedded();
    let localized = catalog.localize_diagnostic("  Something odd happened.  \nInvalid NMM type.");
    assert_eq!(localized.en, "Something odd happened.\nInvalid NMM type.");
    assert_eq!(localized.zh, "Something odd happened.\n无效的药材类型。");
    assert_eq!(catalog.localize_diagnostic(""), EnZh::default());
    assert_eq!(catalog.translate("anything", Language::En), "anything");
}

#[test]
fn load_reports_missing_file() {
    let error = Catalog::load(std::path::Path::new("/nonexistent/catalog.toml")).unwrap_err();
    assert!(error.to_string().contains("/nonexistent/catalog.toml"));
}
