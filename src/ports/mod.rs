//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the assessment logic and the guidance text source and report
//! presentation.

mod guidance;
mod render;

pub use guidance::GuidanceCatalog;
pub use render::{RenderError, ReportRenderer};
