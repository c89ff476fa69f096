//! Clinical color palette and styles.
//!
//! Status colors follow the usual traffic-light reading:
//! green eligible, amber review, red contraindicated.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::EligibilityStatus;

/// Palette and preset styles for the assistant.
pub struct ClinicalTheme;

impl ClinicalTheme {
    /// Teal accent
    pub const ACCENT: Color = Color::Rgb(13, 148, 136); // #0D9488
    pub const ACCENT_LIGHT: Color = Color::Rgb(45, 212, 191); // #2DD4BF

    pub const ELIGIBLE: Color = Color::Rgb(16, 185, 129); // #10B981
    pub const REVIEW: Color = Color::Rgb(251, 191, 36); // #FBBF24
    pub const CONTRAINDICATED: Color = Color::Rgb(244, 63, 94); // #F43F5E
    pub const ADVISORY: Color = Color::Rgb(59, 130, 246); // #3B82F6

    pub const BACKGROUND: Color = Color::Rgb(15, 23, 42); // #0F172A
    pub const BORDER: Color = Color::Rgb(148, 163, 184); // #94A3B8

    pub const TEXT: Color = Color::Rgb(248, 250, 252); // #F8FAFC
    pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_FAINT: Color = Color::Rgb(100, 116, 139); // #64748B

    #[must_use]
    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_FAINT)
    }

    /// Validation errors and contraindications
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::CONTRAINDICATED)
    }

    /// Dose advice and other advisory text
    #[must_use]
    pub fn advisory() -> Style {
        Style::default().fg(Self::ADVISORY)
    }

    /// Active tab
    #[must_use]
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::ACCENT_LIGHT)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Self::focused()
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Self::text_secondary()
    }

    /// Style for an eligibility status or issue severity
    #[must_use]
    pub fn status(status: EligibilityStatus) -> Style {
        let color = match status {
            EligibilityStatus::Eligible => Self::ELIGIBLE,
            EligibilityStatus::NeedsReview => Self::REVIEW,
            EligibilityStatus::Contraindicated => Self::CONTRAINDICATED,
        };
        Style::default().fg(color)
    }

    /// Short marker shown next to a status or issue
    #[must_use]
    pub fn status_icon(status: EligibilityStatus) -> &'static str {
        match status {
            EligibilityStatus::Eligible => "OK",
            EligibilityStatus::NeedsReview => "?",
            EligibilityStatus::Contraindicated => "X",
        }
    }
}
