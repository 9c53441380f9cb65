//! Schema Validation Tests
//!
//! Runs the deep and basic validators against fixture templates and checks
//! the reported lines.

use std::fs;
use std::path::{Path, PathBuf};

use theme_tools::{
    find_schema_block, render, validate_file, validate_source, ReportStyle, SchemaError,
    SchemaWarning, ValidationOptions,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn deep_report(path: &Path) -> Vec<String> {
    render(path, &validate_file(path, ValidationOptions::deep()), ReportStyle::Deep)
}

// =============================================================================
// Deep validation
// =============================================================================

#[test]
fn test_valid_section_schema() {
    let content = include_str!("fixtures/mobile_bar.liquid");
    let schema = validate_source(content, ValidationOptions::deep()).unwrap();
    assert_eq!(schema.value["name"], "Mobile bar");
    assert_eq!(schema.value["blocks"][0]["settings"].as_array().unwrap().len(), 2);
    assert!(schema.warnings.is_empty());

    let path = fixture("mobile_bar.liquid");
    assert_eq!(
        deep_report(&path),
        vec![format!("SUCCESS: Schema in {} is valid JSON.", path.display())]
    );
}

#[test]
fn test_missing_name_is_a_warning() {
    let path = fixture("missing_name.liquid");
    let schema = validate_file(&path, ValidationOptions::deep()).unwrap();
    assert_eq!(schema.warnings, vec![SchemaWarning::MissingField("name".to_string())]);

    let lines = deep_report(&path);
    assert!(lines[0].starts_with("SUCCESS:"));
    assert_eq!(lines[1], "WARNING: 'name' property missing in schema");
}

#[test]
fn test_trailing_comma_points_at_line() {
    let content = include_str!("fixtures/trailing_comma.liquid");
    let block_lines: Vec<&str> = find_schema_block(content).unwrap().json_text().lines().collect();

    match validate_source(content, ValidationOptions::deep()) {
        Err(SchemaError::Parse { message, line, context }) => {
            assert!(message.contains("trailing comma"), "unexpected message: {}", message);
            assert!(line > 1 && line <= block_lines.len());
            assert_eq!(context.as_deref(), Some(block_lines[line - 1]));
        }
        other => panic!("Expected Parse, got {:?}", other),
    }

    let path = fixture("trailing_comma.liquid");
    let lines = deep_report(&path);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("CRITICAL ERROR: Invalid JSON in {}", path.display()));
    assert!(lines[2].starts_with("Error around line "));
}

#[test]
fn test_inline_invalid_json() {
    let content = r#"{% schema %}{"name": }{% endschema %}"#;
    let lines = render(
        Path::new("inline.liquid"),
        &validate_source(content, ValidationOptions::deep()),
        ReportStyle::Deep,
    );
    assert_eq!(lines.last().unwrap(), r#"Error around line 1: {"name": }"#);
}

#[test]
fn test_no_schema_is_reported() {
    let path = fixture("no_schema.liquid");
    assert_eq!(validate_file(&path, ValidationOptions::deep()), Err(SchemaError::NotFound));
    assert_eq!(
        deep_report(&path),
        vec![format!("ERROR: No schema tags found in {}", path.display())]
    );
}

#[test]
fn test_nonexistent_file_is_system_error() {
    let path = fixture("does_not_exist.liquid");
    let outcome = validate_file(&path, ValidationOptions::deep());
    assert!(matches!(&outcome, Err(e) if e.is_system()));

    let lines = deep_report(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("System Error: "));
}

#[test]
fn test_non_utf8_file_is_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.liquid");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

    assert!(matches!(
        validate_file(&path, ValidationOptions::deep()),
        Err(SchemaError::System { .. })
    ));
}

#[test]
fn test_reports_are_idempotent() {
    let fixtures = [
        "mobile_bar.liquid",
        "missing_name.liquid",
        "trailing_comma.liquid",
        "no_schema.liquid",
    ];
    for name in fixtures {
        let path = fixture(name);
        assert_eq!(deep_report(&path), deep_report(&path), "{}", name);

        let basic = || {
            let outcome = validate_file(&path, ValidationOptions::basic());
            render(&path, &outcome, ReportStyle::Basic)
        };
        assert_eq!(basic(), basic(), "{}", name);
    }
}

// =============================================================================
// Basic validation
// =============================================================================

#[test]
fn test_basic_reports() {
    let report = |name: &str| {
        let path = fixture(name);
        render(&path, &validate_file(&path, ValidationOptions::basic()), ReportStyle::Basic)
    };

    assert_eq!(report("mobile_bar.liquid"), vec!["Schema is VALID JSON."]);
    assert_eq!(report("missing_name.liquid"), vec!["Schema is VALID JSON."]);
    assert_eq!(report("no_schema.liquid"), vec!["No schema found."]);

    let invalid = report("trailing_comma.liquid");
    assert_eq!(invalid.len(), 1);
    assert!(invalid[0].starts_with("Schema is INVALID JSON: trailing comma"));
}
