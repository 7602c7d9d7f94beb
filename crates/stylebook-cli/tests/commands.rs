//! End-to-end command runs against a document on disk.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde_json::{json, Value};
use stylebook_cli::cli::Cli;
use stylebook_cli::document::Document;
use stylebook_cli::run;
use tempfile::TempDir;

fn write_document(dir: &Path) -> PathBuf {
    let path = dir.join("styles.json");
    let document = json!({
        "styles": [
            {"id": "S:1", "name": "Heading/H1", "fontName": {"family": "Inter", "style": "Bold"},
             "fontSize": 32, "lineHeight": {"unit": "PIXELS", "value": 40}},
            {"id": "S:2", "name": "Body/Regular", "fontName": {"family": "Inter", "style": "Regular"},
             "fontSize": 14, "lineHeight": {"unit": "PERCENT", "value": 150}},
            {"id": "S:3", "name": "Body/Copy", "fontName": {"family": "Inter", "style": "Regular"},
             "fontSize": 14, "lineHeight": {"unit": "PERCENT", "value": 150}},
            {"id": "S:4", "name": "Caption", "fontName": {"family": "Lato", "style": "Italic"},
             "fontSize": 11}
        ],
        "fonts": [
            {"family": "Inter", "style": "Regular"},
            {"family": "Inter", "style": "Bold"},
            {"family": "Roboto", "style": "Regular"}
        ]
    });
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
    path
}

fn run_json(path: &Path, args: &[&str]) -> (Value, bool) {
    let mut argv = vec!["stylebook", "--output", "json", "-d", path.to_str().unwrap()];
    argv.extend_from_slice(args);
    let report = run(Cli::try_parse_from(argv).unwrap()).unwrap();
    (serde_json::from_str(&report.output).unwrap(), report.success)
}

#[test]
fn test_list_filters_and_flags_missing_fonts() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    let (view, _) = run_json(&path, &["list", "--group", "body", "--size", "14"]);
    let ids: Vec<_> = view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["S:2", "S:3"]);
    assert_eq!(view["total"], 4);

    let (view, _) = run_json(&path, &["list", "--family", "Lato"]);
    assert_eq!(view["rows"][0]["warning"], "family");
}

#[test]
fn test_list_reports_bad_pattern() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());
    let (view, _) = run_json(&path, &["list", "--name", "(oops"]);
    assert!(view["rows"].as_array().unwrap().is_empty());
    assert_eq!(view["errors"].as_array().unwrap().len(), 1);
}

#[test]
fn test_groups_duplicates_fonts() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    let (view, _) = run_json(&path, &["groups"]);
    assert_eq!(view["groups"][1], json!({"path": "Body", "count": 2, "shown": true}));

    let (view, _) = run_json(&path, &["duplicates"]);
    assert_eq!(view["sets"][0]["label"], "Inter Regular 14/150%");
    assert_eq!(view["sets"][0]["names"], json!(["Body/Regular", "Body/Copy"]));

    let (view, _) = run_json(&path, &["fonts"]);
    assert_eq!(view["families"][0]["family"], "Inter");
    assert_eq!(view["missing"][0]["font"], "Lato Italic");
    assert_eq!(view["missing"][0]["reason"], "family");
}

#[test]
fn test_edit_dry_run_leaves_document() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());
    let before = fs::read_to_string(&path).unwrap();

    let (view, success) = run_json(
        &path,
        &["edit", "--group", "body", "--set-group", "Text", "--dry-run"],
    );
    assert!(success);
    assert_eq!(view["touched"], 2);
    assert_eq!(view["pending"].as_array().unwrap().len(), 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_edit_commits_to_document() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    let (view, success) = run_json(
        &path,
        &["edit", "--group", "body", "--id", "S:3", "--set-size", "16", "--set-line-height", "24px"],
    );
    assert!(success);
    assert_eq!(view["committed"], 1);

    let document = Document::load(&path).unwrap();
    let copy = document.styles.iter().find(|s| s.id == "S:3").unwrap();
    assert_eq!(copy.font_size, 16.0);
    assert_eq!(copy.line_height.to_string(), "24px");
    let regular = document.styles.iter().find(|s| s.id == "S:2").unwrap();
    assert_eq!(regular.font_size, 14.0);
}

#[test]
fn test_edit_partial_failure() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    // Neither Roboto Bold nor Roboto Italic is in the catalog.
    let (view, success) = run_json(
        &path,
        &["edit", "--id", "S:1", "--id", "S:4", "--set-family", "Roboto"],
    );
    assert!(!success);
    assert_eq!(view["failed"], 2);

    let (view, success) = run_json(
        &path,
        &["edit", "--id", "S:2", "--id", "S:4", "--set-style", "Bold"],
    );
    assert!(!success);
    assert_eq!(view["committed"], 1);
    assert_eq!(view["failed"], 1);
    let document = Document::load(&path).unwrap();
    assert_eq!(document.styles[1].font_name.style, "Bold");
    assert_eq!(document.styles[3].font_name.style, "Italic");
}

#[test]
fn test_message_binds_variable() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());

    let (view, success) = run_json(
        &path,
        &[
            "message",
            r#"{"type":"setVariable","variableId":"V:size","styleId":"S:1","propertyType":"fontSize"}"#,
        ],
    );
    assert!(success);
    assert_eq!(view["committed"], 1);
    let document = Document::load(&path).unwrap();
    assert_eq!(
        serde_json::to_value(&document.styles[0]).unwrap()["boundVariables"],
        json!({"fontSize": "V:size"})
    );
}

#[test]
fn test_state_dir_keeps_search_between_runs() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());
    let state = tmp.path().join("state");
    let state = state.to_str().unwrap();

    run_json(&path, &["--state-dir", state, "list", "--group", "heading"]);
    assert!(tmp.path().join("state/styles/search.group.json").exists());

    let (view, _) = run_json(&path, &["--state-dir", state, "list"]);
    assert_eq!(view["rows"].as_array().unwrap().len(), 1);

    let (view, _) = run_json(&path, &["--state-dir", state, "list", "--clear"]);
    assert_eq!(view["rows"].as_array().unwrap().len(), 4);
}

#[test]
fn test_state_dir_keeps_staged_edits_between_runs() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());
    let state = tmp.path().join("state");
    let state = state.to_str().unwrap();

    run_json(
        &path,
        &["--state-dir", state, "edit", "--group", "body", "--set-group", "Text", "--dry-run"],
    );

    let (view, success) = run_json(&path, &["--state-dir", state, "edit", "--dry-run"]);
    assert!(success);
    assert_eq!(view["pending"].as_array().unwrap().len(), 2);
}

#[test]
fn test_text_output_renders_template() {
    let tmp = TempDir::new().unwrap();
    let path = write_document(tmp.path());
    let report = run(Cli::try_parse_from([
        "stylebook",
        "--output",
        "text",
        "-d",
        path.to_str().unwrap(),
        "list",
    ])
    .unwrap())
    .unwrap();
    assert!(report.output.starts_with("Styles (4 of 4)"));
    assert!(report.output.contains("Heading"));
    assert!(report.output.contains("missing family"));
    assert!(!report.output.contains('\x1b'));
}

#[test]
fn test_missing_document_is_error() {
    let cli = Cli::try_parse_from(["stylebook", "-d", "/nonexistent/styles.json", "groups"]).unwrap();
    let err = run(cli).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to read document"));
}
