//! Patient guidance blocks shown alongside an assessment.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GuidanceKind {
    Preparation,
    SideEffects,
    PostTherapy,
}

impl GuidanceKind {
    pub const ALL: [Self; 3] = [Self::Preparation, Self::SideEffects, Self::PostTherapy];
}

/// A titled list of guidance items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidanceSection {
    pub kind: GuidanceKind,
    pub title: String,
    pub items: Vec<String>,
    /// Printed after the items, if any.
    pub closing_note: Option<String>,
}

impl GuidanceSection {
    #[must_use]
    pub fn new(kind: GuidanceKind, title: impl Into<String>, items: &[&str]) -> Self {
        Self {
            kind,
            title: title.into(),
            items: items.iter().map(|s| (*s).to_string()).collect(),
            closing_note: None,
        }
    }

    #[must_use]
    pub fn with_closing_note(mut self, note: impl Into<String>) -> Self {
        self.closing_note = Some(note.into());
        self
    }
}
