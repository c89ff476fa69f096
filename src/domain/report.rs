//! Complete advisory report for one patient.

use serde::Serialize;

use super::dose::DoseAdvice;
use super::eligibility::EligibilityAssessment;
use super::guidance::GuidanceSection;

/// Reminder printed at the end of every report.
pub const CLINICIAN_REMINDER: &str =
    "All recommendations are advisory and require clinician confirmation.";

/// Eligibility verdict, dose advice and guidance for one record.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub eligibility: EligibilityAssessment,
    pub dose: DoseAdvice,
    pub preparation: GuidanceSection,
    pub side_effects: GuidanceSection,
    pub post_therapy: GuidanceSection,
    /// Always true; the report is never a clinical decision.
    pub requires_clinician_confirmation: bool,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl AssessmentReport {
    #[must_use]
    pub fn new(
        eligibility: EligibilityAssessment,
        dose: DoseAdvice,
        preparation: GuidanceSection,
        side_effects: GuidanceSection,
        post_therapy: GuidanceSection,
    ) -> Self {
        Self {
            eligibility,
            dose,
            preparation,
            side_effects,
            post_therapy,
            requires_clinician_confirmation: true,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Guidance sections in display order.
    #[must_use]
    pub fn guidance(&self) -> [&GuidanceSection; 3] {
        [&self.preparation, &self.side_effects, &self.post_therapy]
    }
}
