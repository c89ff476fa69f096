//! Render port: Presentation of a finished assessment report.

use crate::domain::AssessmentReport;

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// Trait for turning a report into displayable text.
///
/// Renderers own all formatting; the report itself is plain data.
pub trait ReportRenderer {
    /// Render the full report.
    ///
    /// # Errors
    /// Returns error if the output cannot be produced.
    fn render(&self, report: &AssessmentReport) -> Result<String, RenderError>;
}
