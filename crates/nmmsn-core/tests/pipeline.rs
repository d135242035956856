//! End-to-end naming of request records.

use insta::assert_snapshot;
use nmmsn_core::{Construction, construct_name, request_failure, respond};
use nmmsn_locale::{Catalog, TransliterationError, Transliterator};
use nmmsn_model::{NameElementRecord, NamingResponse, NeeItem};
use serde_json::json;

/// Wraps the text instead of reading it, so expectations do not depend on
/// pinyin tables.
struct Bracketed;

impl Transliterator for Bracketed {
    fn transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        Ok(format!("<{text}>"))
    }
}

struct Unreadable;

impl Transliterator for Unreadable {
    fn transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        Err(TransliterationError::NoReading {
            ch: '?',
            text: text.to_string(),
        })
    }
}

fn record(json: serde_json::Value) -> NameElementRecord {
    serde_json::from_value(json).expect("valid record")
}

fn ephedra_herb() -> NameElementRecord {
    record(json!({
        "nmm_type": "plant",
        "species_origins": [["Ephedra sinica", "草麻黄"]],
        "medicinal_parts": [["herbaceous stem", "草质茎"]],
        "special_descriptions": [],
        "processing_methods": [],
    }))
}

fn processed_ephedra() -> NameElementRecord {
    record(json!({
        "nmm_type": "processed",
        "species_origins": [
            ["Ephedra sinica", "草麻黄"], "or",
            ["Ephedra intermedia", "中麻黄"], "or",
            ["Ephedra equisetina", "木贼麻黄"]
        ],
        "medicinal_parts": [["root", "根"], "and", ["rhizome", "根茎"], "or", ["herbaceous stem", "草质茎"]],
        "special_descriptions": [["fresh", "鲜"], "or", ["dried", "干"]],
        "processing_methods": [["stirfried", "炒制"], "and", ["steamed", "蒸制"]],
    }))
}

fn respond_json(record: &NameElementRecord) -> serde_json::Value {
    let response = respond(record, &Catalog::embedded(), &Bracketed).expect("transliteration");
    serde_json::to_value(response).expect("serialize response")
}

#[test]
fn names_single_species_herb() {
    let response = respond_json(&ephedra_herb());
    assert_eq!(
        response,
        json!({
            "success": true,
            "error_msg": "",
            "error_msg_en_zh": {"en": "", "zh": ""},
            "nmmsn": {
                "nmmsn": "Ephedra sinica Herbaceous-stem",
                "nmmsn_zh": {"zh": "草麻黄草质茎", "pinyin": "<草麻黄草质茎>"},
                "nmmsn_name_element": {
                    "nmm_type": "plant",
                    "species_origins": [["Ephedra sinica", "草麻黄"]],
                    "medicinal_parts": [["herbaceous stem", "草质茎"]],
                    "special_descriptions": [],
                    "processing_methods": []
                },
                "nmmsn_seq": [
                    ["Ephedra sinica", "草麻黄"],
                    ["Herbaceous-stem", "草质茎"],
                    ["", ""],
                    ["", ""]
                ]
            }
        })
    );
}

#[test]
fn names_processed_material_with_alternatives() {
    let response = respond_json(&processed_ephedra());
    assert_eq!(response["success"], true);
    assert_eq!(
        response["nmmsn"]["nmmsn"],
        "Ephedra equisetina vel intermedia vel sinica Herbaceous-stem or Rhizome and Root \
         Dried or Fresh Stirfried and Steamed"
    );
    assert_eq!(
        response["nmmsn"]["nmmsn_zh"]["zh"],
        "蒸制炒制鲜或干木贼麻黄或中麻黄或草麻黄草质茎或根茎与根"
    );
    assert_eq!(
        response["nmmsn"]["nmmsn_name_element"],
        json!({
            "nmm_type": "processed",
            "species_origins": [
                ["Ephedra equisetina", "木贼麻黄"], "or",
                ["Ephedra intermedia", "中麻黄"], "or",
                ["Ephedra sinica", "草麻黄"]
            ],
            "medicinal_parts": [["herbaceous stem", "草质茎"], "or", ["rhizome", "根茎"], "and", ["root", "根"]],
            "special_descriptions": [["dried", "干"], "or", ["fresh", "鲜"]],
            "processing_methods": [["stirfried", "炒制"], "and", ["steamed", "蒸制"]]
        })
    );
    assert_eq!(
        response["nmmsn"]["nmmsn_seq"],
        json!([
            ["Ephedra equisetina vel intermedia vel sinica", "木贼麻黄或中麻黄或草麻黄"],
            ["Herbaceous-stem or Rhizome and Root", "草质茎或根茎与根"],
            ["Dried or Fresh", "鲜或干"],
            ["Stirfried and Steamed", "蒸制炒制"]
        ])
    );
    assert_snapshot!(response["error_msg"].as_str().unwrap_or_default(), @r"
    Pipe: construct_nmmsn_spe_ori. Status: warning. Reason: Multiple species origins detected.
    Pipe: construct_nmmsn_med_par. Status: warning. Reason: Multiple medicinal parts detected.
    Pipe: construct_nmmsn_spe_des. Status: warning. Reason: Multiple special descriptions detected.
    ");
    assert_eq!(
        response["error_msg_en_zh"],
        json!({
            "en": "Multiple species origins detected.\nMultiple medicinal parts detected.\nMultiple special descriptions detected.",
            "zh": "检测到多个物种基源。\n检测到多个药用部位。\n检测到多个特殊描述。"
        })
    );
}

#[test]
fn processing_methods_on_unprocessed_material_fail() {
    let mut record = ephedra_herb();
    record.processing_methods = vec![NeeItem::term("stirfried", "炒制")];
    let response = respond(&record, &Catalog::embedded(), &Bracketed).unwrap();
    let NamingResponse::Failure(failure) = response else {
        panic!("expected a failure document");
    };
    assert!(!failure.success);
    assert_snapshot!(failure.error_msg.as_str(), @"Pipe: construct_nmmsn. Status: failed. Reason: Processing methods detected in non-processed NMM.");
    assert_eq!(failure.error_msg_en_zh.zh, "在非炮制药材中检测到炮制方法。");

    let json = serde_json::to_value(NamingResponse::Failure(failure)).unwrap();
    assert!(json.get("nmmsn").is_none());
}

#[test]
fn every_failing_element_is_reported() {
    let record = record(json!({
        "nmm_type": "plant",
        "species_origins": [],
        "medicinal_parts": [["root", "根"], "and"],
        "special_descriptions": [["fresh", "鲜"], "or", ["raw", "鲜"]],
        "processing_methods": [],
    }));
    let construction = construct_name(&record);
    assert!(!construction.is_named());
    assert_snapshot!(construction.diagnostic().to_string(), @r"
    Pipe: construct_nmmsn_spe_ori. Status: failed. Reason: The name element list is empty.
    Pipe: construct_nmmsn_med_par. Status: failed. Reason: The first and the last item could not be logic operators.
    Pipe: construct_nmmsn_spe_des. Status: failed. Reason: The mapping type is not one-to-one.
    ");
}

#[test]
fn unknown_category_is_a_warning() {
    let mut record = ephedra_herb();
    record.nmm_type = " Vegetable ".to_string();
    let Construction::Named(named) = construct_name(&record) else {
        panic!("expected a name");
    };
    assert_eq!(named.nmm_type, "vegetable");
    assert_eq!(named.category, None);
    assert_eq!(
        named.diagnostic.to_string(),
        "Pipe: construct_nmmsn. Status: warning. Reason: Invalid NMM type."
    );
}

#[test]
fn unnameable_category_is_a_warning() {
    let mut record = ephedra_herb();
    record.nmm_type = "Mineral".to_string();
    let construction = construct_name(&record);
    assert!(construction.is_named());
    assert_eq!(
        construction.diagnostic().lines()[0].reason,
        "NMM type cannot be named automatically."
    );
}

#[test]
fn category_literal_is_normalized_in_echo() {
    let mut record = processed_ephedra();
    record.nmm_type = "  PROCESSED ".to_string();
    let response = respond_json(&record);
    assert_eq!(response["nmmsn"]["nmmsn_name_element"]["nmm_type"], "processed");
}

#[test]
fn transliteration_failure_is_an_error() {
    let error = respond(&ephedra_herb(), &Catalog::embedded(), &Unreadable).unwrap_err();
    assert!(error.to_string().contains("草麻黄草质茎"));
}

#[test]
fn request_failure_translates_known_messages() {
    let response = request_failure("Invalid NMM type.", &Catalog::embedded());
    assert!(!response.is_success());
    assert_eq!(response.error_msg_en_zh().zh, "无效的药材类型。");
    let response = request_failure("missing field `nmm_type`", &Catalog::embedded());
    assert_eq!(response.error_msg_en_zh().zh, "missing field `nmm_type`");
}
