//! Assessment service: Orchestrates one eligibility assessment.
//!
//! This service coordinates:
//! - Rule evaluation
//! - Dose lookup
//! - Guidance assembly

use crate::domain::{
    AssessmentReport, DoseAdvisor, EligibilityEngine, PatientIntake, PatientRecord,
};
use crate::ports::GuidanceCatalog;
use crate::AssistError;

/// Service producing advisory reports for validated patient records.
///
/// Holds no per-patient state; each call is independent.
pub struct AssessmentService<G>
where
    G: GuidanceCatalog,
{
    engine: EligibilityEngine,
    advisor: DoseAdvisor,
    catalog: G,
}

impl<G> AssessmentService<G>
where
    G: GuidanceCatalog,
{
    /// Create a new assessment service.
    pub fn new(catalog: G) -> Self {
        Self {
            engine: EligibilityEngine::new(),
            advisor: DoseAdvisor::new(),
            catalog,
        }
    }

    /// Access the guidance catalog (for viewing guidance without a patient).
    pub fn catalog(&self) -> &G {
        &self.catalog
    }

    /// The engine used for evaluation.
    #[must_use]
    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    /// Evaluate a record and assemble the full report.
    ///
    /// Infallible: every valid record yields a report.
    #[must_use]
    pub fn assess(&self, record: &PatientRecord) -> AssessmentReport {
        let eligibility = self.engine.evaluate(record);
        for issue in &eligibility.issues {
            tracing::debug!(rule = issue.rule.code(), severity = %issue.severity, "Rule fired");
        }

        let dose = self.advisor.suggest(record.risk_category());

        tracing::info!(
            status = %eligibility.status,
            issues = eligibility.issues.len(),
            risk = %dose.category,
            "Assessment complete"
        );

        AssessmentReport::new(
            eligibility,
            dose,
            self.catalog.preparation(),
            self.catalog.side_effects(),
            self.catalog.post_therapy(),
        )
    }

    /// Validate raw intake answers, then assess.
    ///
    /// # Errors
    /// Returns [`AssistError::Validation`] if any answer is malformed; the
    /// engine is not run in that case.
    pub fn assess_intake(&self, intake: &PatientIntake) -> Result<AssessmentReport, AssistError> {
        let record = intake.validate().inspect_err(|errors| {
            tracing::warn!(fields = errors.len(), "Intake rejected");
        })?;
        Ok(self.assess(&record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::guideline::GuidelineCatalog;
    use crate::domain::{DoseBand, EligibilityStatus, RiskCategory, RuleId};

    fn service() -> AssessmentService<GuidelineCatalog> {
        AssessmentService::new(GuidelineCatalog::new())
    }

    #[test]
    fn test_eligible_scenario() {
        let report = service()
            .assess_intake(&PatientIntake::sample())
            .expect("Should assess");

        assert_eq!(report.eligibility.status, EligibilityStatus::Eligible);
        assert!(report.eligibility.issues.is_empty());
        assert_eq!(report.dose.band, Some(DoseBand::Approximately(30)));
        assert!(report.requires_clinician_confirmation);
        assert_eq!(report.guidance().len(), 3);
    }

    #[test]
    fn test_pregnancy_scenario() {
        let intake = PatientIntake {
            pregnant: "y".to_string(),
            ..PatientIntake::sample()
        };
        let report = service().assess_intake(&intake).expect("Should assess");

        assert_eq!(report.eligibility.status, EligibilityStatus::Contraindicated);
        assert_eq!(report.eligibility.issues.len(), 1);
        assert_eq!(report.eligibility.issues[0].rule, RuleId::Pregnancy);
        // Dose and guidance are still produced; the caller decides what to show.
        assert_eq!(report.dose.category, RiskCategory::Low);
    }

    #[test]
    fn test_invalid_intake_is_rejected() {
        let intake = PatientIntake {
            age: "abc".to_string(),
            ..PatientIntake::sample()
        };
        let err = service().assess_intake(&intake).expect_err("Should reject");
        assert!(matches!(err, AssistError::Validation(ref e) if e.len() == 1));
    }

    #[test]
    fn test_high_risk_dose() {
        let intake = PatientIntake {
            risk_category: "HIGH".to_string(),
            ..PatientIntake::sample()
        };
        let report = service().assess_intake(&intake).expect("Should assess");
        assert_eq!(report.dose.band, Some(DoseBand::UpTo(250)));
    }
}
