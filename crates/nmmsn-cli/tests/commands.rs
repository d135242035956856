//! Command behaviour without a process boundary.

use std::path::Path;

use insta::assert_snapshot;
use nmmsn_cli::commands::{
    EXIT_BAD_REQUEST, EXIT_OK, categories_table, name_request, parse_expression, render_response,
};
use nmmsn_cli::settings::{Settings, load_settings};
use nmmsn_locale::{Catalog, TransliterationError, Transliterator};

struct CharCount;

impl Transliterator for CharCount {
    fn transliterate(&self, text: &str) -> Result<String, TransliterationError> {
        Ok(text.chars().count().to_string())
    }
}

const HERB: &str = r#"{
    "nmm_type": "plant",
    "species_origins": [["Ephedra sinica", "草麻黄"]],
    "medicinal_parts": [["herbaceous stem", "草质茎"]],
    "special_descriptions": [],
    "processing_methods": []
}"#;

#[test]
fn names_a_record() {
    let outcome = name_request(HERB, &Catalog::embedded(), &CharCount).unwrap();
    assert_eq!(outcome.exit_code, EXIT_OK);
    assert!(outcome.response.is_success());
    let json: serde_json::Value =
        serde_json::from_str(&render_response(&outcome.response, false).unwrap()).unwrap();
    assert_eq!(json["nmmsn"]["nmmsn"], "Ephedra sinica Herbaceous-stem");
    assert_eq!(json["nmmsn"]["nmmsn_zh"]["pinyin"], "6");
}

#[test]
fn naming_failure_still_exits_ok() {
    let body = HERB.replace(
        "\"processing_methods\": []",
        "\"processing_methods\": [[\"stirfried\", \"炒制\"]]",
    );
    let outcome = name_request(&body, &Catalog::embedded(), &CharCount).unwrap();
    assert_eq!(outcome.exit_code, EXIT_OK);
    assert!(!outcome.response.is_success());
}

#[test]
fn malformed_request_is_a_bad_request() {
    let outcome = name_request(
        r#"{"nmm_type": "plant", "species_origins": []}"#,
        &Catalog::embedded(),
        &CharCount,
    )
    .unwrap();
    assert_eq!(outcome.exit_code, EXIT_BAD_REQUEST);
    assert!(!outcome.response.is_success());
    assert!(outcome.response.error_msg().contains("missing field"));
    assert_eq!(
        outcome.response.error_msg_en_zh().en,
        outcome.response.error_msg()
    );

    let outcome = name_request("not json", &Catalog::embedded(), &CharCount).unwrap();
    assert_eq!(outcome.exit_code, EXIT_BAD_REQUEST);
}

#[test]
fn pretty_output_is_indented() {
    let outcome = name_request(HERB, &Catalog::embedded(), &CharCount).unwrap();
    let pretty = render_response(&outcome.response, true).unwrap();
    assert!(pretty.starts_with("{\n  \"success\": true"));
}

#[test]
fn parses_text_form() {
    assert_snapshot!(
        parse_expression("root | 根 and rhizome | 根茎", false, false).unwrap(),
        @r#"[["root","根"],"and",["rhizome","根茎"]]"#
    );
    assert_snapshot!(
        parse_expression("root | 根 and rhizome | 根茎", true, false).unwrap(),
        @r#"[["rhizome","根茎"],"and",["root","根"]]"#
    );
    assert_snapshot!(
        parse_expression("root | 根 and rhizome | 根茎", true, true).unwrap(),
        @r#"[["root","根"],"and",["rhizome","根茎"]]"#
    );
}

#[test]
fn rejects_malformed_text() {
    let error = parse_expression("root | 根 and", false, false).unwrap_err();
    assert!(format!("{error:#}").starts_with("parse name-element text"));
}

#[test]
fn categories_table_lists_all_categories() {
    let table = categories_table().to_string();
    for literal in ["plant", "processed_other", "artificial", "植物药", "炮制药"] {
        assert!(table.contains(literal), "missing {literal}");
    }
}

#[test]
fn missing_settings_file_gives_defaults() {
    let settings = load_settings(Path::new("/nonexistent/nmmsn/settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.catalog().unwrap().len(), Catalog::embedded().len());
}

#[test]
fn missing_catalog_is_an_error() {
    let settings = Settings {
        pretty: false,
        catalog: Some("/nonexistent/nmmsn/zh.toml".into()),
    };
    assert!(settings.catalog().is_err());
}
