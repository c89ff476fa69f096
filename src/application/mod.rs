//! Application layer: Use cases and services.
//!
//! This module combines the domain rules with the guidance port to
//! produce complete assessment reports.

mod assessment;

pub use assessment::AssessmentService;
