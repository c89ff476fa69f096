//! Report renderers: console text and JSON.

use std::fmt::Write;

use crate::domain::{AssessmentReport, GuidanceSection, CLINICIAN_REMINDER};
use crate::ports::{RenderError, ReportRenderer};

/// Console layout: summary, guidance, dose, side effects, precautions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl PlainTextRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn write_section(out: &mut String, section: &GuidanceSection) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}:", section.title)?;
    for item in &section.items {
        writeln!(out, "  • {item}")?;
    }
    if let Some(note) = &section.closing_note {
        writeln!(out, "{note}")?;
    }
    Ok(())
}

impl ReportRenderer for PlainTextRenderer {
    fn render(&self, report: &AssessmentReport) -> Result<String, RenderError> {
        let mut out = String::new();
        let eligibility = &report.eligibility;

        writeln!(out, "--- Eligibility Summary ---")?;
        writeln!(out, "Status: {}", eligibility.status)?;
        if eligibility.issues.is_empty() {
            writeln!(out, "No issues detected.")?;
        } else {
            writeln!(out, "Issues:")?;
            for issue in &eligibility.issues {
                writeln!(out, "- [{}] {}", issue.rule.code(), issue.message)?;
            }
        }

        write_section(&mut out, &report.preparation)?;

        writeln!(out)?;
        match report.dose.band {
            Some(band) => writeln!(
                out,
                "Dose Suggestion (advisory only): {} [{}]",
                report.dose.text, band
            )?,
            None => writeln!(out, "Dose Suggestion (advisory only): {}", report.dose.text)?,
        }

        write_section(&mut out, &report.side_effects)?;
        write_section(&mut out, &report.post_therapy)?;

        writeln!(out)?;
        writeln!(out, "*** Reminder: {CLINICIAN_REMINDER} ***")?;

        Ok(out)
    }
}

/// Serializes the report as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    #[must_use]
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &AssessmentReport) -> Result<String, RenderError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
