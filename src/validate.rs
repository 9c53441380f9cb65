//! Schema extraction and validation
//!
//! Pulls the `{% schema %}` block out of a template and checks that it is
//! parseable JSON. Two presets exist:
//!
//! - **deep**: also warns when the schema has no `name` and attaches the
//!   offending source line to parse errors
//! - **basic**: parseability only

use std::fmt;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::SchemaError;
use crate::schema::find_schema_block;

/// Field every section schema is expected to carry
pub const NAME_FIELD: &str = "name";

/// Which optional diagnostics to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Warn when the parsed schema lacks a `name` key
    pub check_name: bool,
    /// Attach the offending line of the block to parse errors
    pub context_line: bool,
}

impl ValidationOptions {
    pub fn deep() -> Self {
        Self {
            check_name: true,
            context_line: true,
        }
    }

    pub fn basic() -> Self {
        Self {
            check_name: false,
            context_line: false,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::deep()
    }
}

/// Non-fatal findings on an otherwise valid schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaWarning {
    MissingField(String),
}

impl fmt::Display for SchemaWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaWarning::MissingField(field) => {
                write!(f, "'{}' property missing in schema", field)
            }
        }
    }
}

/// A schema block that parsed successfully
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSchema {
    pub value: Value,
    pub warnings: Vec<SchemaWarning>,
}

impl ValidatedSchema {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Validate the schema block embedded in `content`
pub fn validate_source(
    content: &str,
    options: ValidationOptions,
) -> Result<ValidatedSchema, SchemaError> {
    let block = find_schema_block(content).ok_or(SchemaError::NotFound)?;
    let json_text = block.json_text();
    debug!(line = block.line_in(content), len = json_text.len(), "schema block located");

    let value: Value = serde_json::from_str(json_text).map_err(|e| {
        let line = e.line();
        let context = if options.context_line {
            context_line(json_text, line)
        } else {
            None
        };
        SchemaError::Parse {
            message: e.to_string(),
            line,
            context,
        }
    })?;

    let mut warnings = Vec::new();
    if options.check_name && !has_field(&value, NAME_FIELD) {
        warnings.push(SchemaWarning::MissingField(NAME_FIELD.to_string()));
    }

    Ok(ValidatedSchema { value, warnings })
}

/// Read `path` and validate its schema block.
///
/// Any failure to read the file is reported as [`SchemaError::System`].
pub fn validate_file(
    path: &Path,
    options: ValidationOptions,
) -> Result<ValidatedSchema, SchemaError> {
    let content = std::fs::read_to_string(path).map_err(SchemaError::system)?;
    let outcome = validate_source(&content, options);
    match &outcome {
        Ok(schema) => info!(
            path = %path.display(),
            warnings = schema.warnings.len(),
            "schema valid"
        ),
        Err(e) => info!(path = %path.display(), error = %e, "schema rejected"),
    }
    outcome
}

/// Whether `value` is an object with key `field`.
///
/// Arrays and strings never count, even when they contain `field` as an
/// element or substring.
fn has_field(value: &Value, field: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(field))
}

/// Line `line` (1-based) of `text`, if it exists
fn context_line(text: &str, line: usize) -> Option<String> {
    if line == 0 {
        return None;
    }
    text.lines().nth(line - 1).map(str::to_string)
}
