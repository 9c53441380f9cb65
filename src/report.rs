//! Console rendering of validation outcomes

use std::path::Path;

use crate::error::SchemaError;
use crate::validate::ValidatedSchema;

/// Message set used when printing an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Names the file, prints warnings and context lines
    Deep,
    /// One line per outcome
    Basic,
}

/// Render an outcome as the lines a binary prints, in order
pub fn render(
    path: &Path,
    outcome: &Result<ValidatedSchema, SchemaError>,
    style: ReportStyle,
) -> Vec<String> {
    let path = path.display();
    let mut lines = Vec::new();

    match (style, outcome) {
        (ReportStyle::Deep, Ok(schema)) => {
            lines.push(format!("SUCCESS: Schema in {} is valid JSON.", path));
            for warning in &schema.warnings {
                lines.push(format!("WARNING: {}", warning));
            }
        }
        (ReportStyle::Deep, Err(SchemaError::NotFound)) => {
            lines.push(format!("ERROR: No schema tags found in {}", path));
        }
        (ReportStyle::Deep, Err(SchemaError::Parse { message, line, context })) => {
            lines.push(format!("CRITICAL ERROR: Invalid JSON in {}", path));
            lines.push(message.clone());
            if let Some(context) = context {
                lines.push(format!("Error around line {}: {}", line, context));
            }
        }
        (ReportStyle::Basic, Ok(_)) => lines.push("Schema is VALID JSON.".to_string()),
        (ReportStyle::Basic, Err(SchemaError::NotFound)) => {
            lines.push("No schema found.".to_string());
        }
        (ReportStyle::Basic, Err(SchemaError::Parse { message, .. })) => {
            lines.push(format!("Schema is INVALID JSON: {}", message));
        }
        (_, Err(SchemaError::System { message })) => {
            lines.push(format!("System Error: {}", message));
        }
    }

    lines
}
