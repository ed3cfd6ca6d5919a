//! Integration tests for the decision language library.
//!
//! Scenarios exercise the public catalog facade: category lookups, rendering, and the
//! consistency report a maintainer sees before shipping a custom catalog.

use std::collections::BTreeMap;
use std::io::Cursor;

use codda::language::{
    apply_substitution, placeholders, CatalogError, CatalogIssue, TemplateCategory,
    TemplateLibrary,
};

#[test]
fn every_category_lists_only_its_own_templates() {
    let library = TemplateLibrary::builtin();

    let mut total = 0;
    for category in TemplateCategory::all() {
        let templates = library.by_category(*category);
        assert!(!templates.is_empty(), "{category} has templates");
        assert!(templates
            .iter()
            .all(|template| template.category == *category));
        total += templates.len();
    }

    assert_eq!(total, library.len());
    assert_eq!(library.len(), 27);
}

#[test]
fn unknown_lookups_are_empty_rather_than_errors() {
    let library = TemplateLibrary::builtin();

    assert!(library.by_category_key("appeals").is_empty());
    assert!(library.by_id("does-not-exist").is_none());
    assert!(library
        .render("does-not-exist", &BTreeMap::new())
        .is_none());
}

#[test]
fn rendering_fills_every_declared_variable() {
    let library = TemplateLibrary::builtin();
    let template = library
        .by_id("issue-multiple-periods")
        .expect("multiple periods template");

    let values: BTreeMap<String, String> = template
        .variables
        .iter()
        .map(|name| (name.clone(), format!("<{name}>")))
        .collect();
    let rendered = library
        .render(&template.id, &values)
        .expect("template renders");

    assert!(rendered.is_complete());
    assert!(rendered.text.contains("from <START_DATE_2> to <END_DATE_2>"));
}

#[test]
fn substitution_leaves_unknown_tokens_in_place() {
    let text = apply_substitution("[A] then [B] then [A]", [("A", "x")]);
    assert_eq!(text, "x then [B] then x");
    assert_eq!(placeholders(&text), vec!["B".to_string()]);
}

#[test]
fn builtin_catalog_reports_undeclared_pronoun_tokens() {
    let library = TemplateLibrary::builtin();
    let issues = library.validate();

    assert_eq!(issues.len(), 7);
    assert!(issues
        .iter()
        .all(|issue| matches!(issue, CatalogIssue::UndeclaredPlaceholder { .. })));
    assert!(issues.iter().any(|issue| matches!(
        issue,
        CatalogIssue::UndeclaredPlaceholder { template_id, name }
            if template_id == "analysis-insanity-negative" && name == "he/she"
    )));
}

#[test]
fn custom_catalogs_load_from_json() {
    let json = r#"[
        {
            "id": "issue-custom",
            "category": "issue",
            "title": "Custom Issue",
            "content": "Whether service from [START_DATE] is honorable for VA purposes.",
            "variables": ["START_DATE"]
        }
    ]"#;

    let library = TemplateLibrary::from_json_reader(Cursor::new(json)).expect("catalog loads");

    assert_eq!(library.len(), 1);
    assert!(library.validate().is_empty());
    assert!(library.regulation_citations().is_empty());
}

#[test]
fn custom_catalogs_reject_duplicate_ids() {
    let json = r#"[
        {"id": "dup", "category": "issue", "title": "One", "content": "a"},
        {"id": "dup", "category": "issue", "title": "Two", "content": "b"}
    ]"#;

    match TemplateLibrary::from_json_reader(Cursor::new(json)) {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "dup"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}
