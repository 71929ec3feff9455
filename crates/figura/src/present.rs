//! Presentation of aggregate results, decoupled from computation

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Output encodings for an aggregate result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Machine-readable JSON object
    Structured,
    /// Markdown rendering for embedding in documents
    Markup,
}

/// An aggregate total, as carried by the structured encoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// The computed total
    pub total: f64,
}

/// Render an aggregate total in the requested encoding.
///
/// Pure: the only effect is the returned string. The structured encoding
/// prints floats in their shortest round-trippable form, so the numeric
/// value survives a parse back into an [`AggregateReport`].
pub fn present(total: f64, format: Format) -> String {
    match format {
        Format::Structured => json!({ "total": total }).to_string(),
        Format::Markup => format!("**total:** {total}"),
    }
}
