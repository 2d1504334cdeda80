//! Rendering of validation findings

use crate::config::models::Format;
use crate::core::validation::ErrorList;
use crate::utils::error::Result;

/// Render findings as text (one per line) or as a JSON array
pub fn render_report(errors: &ErrorList, format: Format) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(errors)?),
        Format::Text if errors.is_empty() => Ok("configuration is valid".to_string()),
        Format::Text => Ok(errors.to_string()),
    }
}
