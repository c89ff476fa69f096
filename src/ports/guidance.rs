//! Guidance port: Source of the static patient guidance text.

use crate::domain::{GuidanceKind, GuidanceSection};

/// Provider of preparation, side-effect and post-therapy guidance.
///
/// None of the sections depend on the patient record.
pub trait GuidanceCatalog: Send + Sync {
    /// Steps to complete before therapy.
    fn preparation(&self) -> GuidanceSection;

    /// Common side effects and adverse events.
    fn side_effects(&self) -> GuidanceSection;

    /// Radiation-safety precautions for the first days after therapy.
    fn post_therapy(&self) -> GuidanceSection;

    /// Look up a section by kind.
    fn section(&self, kind: GuidanceKind) -> GuidanceSection {
        match kind {
            GuidanceKind::Preparation => self.preparation(),
            GuidanceKind::SideEffects => self.side_effects(),
            GuidanceKind::PostTherapy => self.post_therapy(),
        }
    }
}
