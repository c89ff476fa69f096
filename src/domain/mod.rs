//! Domain layer: Core clinical types and rules.
//!
//! Pure Rust types with no I/O. The eligibility engine and dose advisor
//! are total functions over a validated [`PatientRecord`].

mod dose;
mod eligibility;
mod guidance;
mod intake;
mod patient;
mod report;
mod validation;

#[cfg(test)]
mod proptest;

pub use dose::{DoseAdvice, DoseAdvisor, DoseBand, DoseCaveat};
pub use eligibility::{
    EligibilityAssessment, EligibilityEngine, EligibilityRule, EligibilityStatus, Issue, RuleId,
    TSH_STIMULATION_THRESHOLD,
};
pub use guidance::{GuidanceKind, GuidanceSection};
pub use intake::{IntakeField, IntakeQuestion, PatientIntake, INTAKE_QUESTIONS, MAX_AGE};
pub use patient::{ClinicalFlags, PatientRecord, RiskCategory, Sex};
pub use report::{AssessmentReport, CLINICIAN_REMINDER};
pub use validation::{ValidationError, ValidationErrors};
