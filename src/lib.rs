//! # I-131 Assist
//!
//! Advisory eligibility screening for radioiodine (I-131) therapy.
//!
//! This crate provides:
//! - Validation of intake answers into an immutable patient record
//! - A fixed, ordered eligibility rule table with max-severity semantics
//! - Dose-band lookup by risk category
//! - Static preparation, side-effect and post-therapy guidance
//! - Terminal UI for local, single-patient use
//!
//! Output is advisory only and always requires clinician confirmation.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core clinical types and rules (PatientRecord, EligibilityEngine, DoseAdvisor)
//! - `ports`: Trait definitions for guidance text and report rendering
//! - `adapters`: Concrete implementations (guideline catalog, renderers, log sanitizer)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{
    AssessmentReport, DoseAdvice, DoseAdvisor, EligibilityAssessment, EligibilityEngine,
    EligibilityStatus, Issue, PatientIntake, PatientRecord, RiskCategory,
};

/// Result type for assistant operations
pub type Result<T> = std::result::Result<T, AssistError>;

/// Main error type for the assistant
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Invalid patient data: {0}")]
    Validation(#[from] domain::ValidationErrors),

    #[error("Report rendering failed: {0}")]
    Render(#[from] ports::RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
