//! Advisory I-131 activity bands by risk category.
//!
//! These are typical published ranges, not a prescription.

use std::fmt;

use serde::Serialize;

use super::patient::RiskCategory;

/// Typical administered activity, in millicuries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DoseBand {
    Approximately(u32),
    Range { low: u32, high: u32 },
    UpTo(u32),
}

impl fmt::Display for DoseBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approximately(mci) => write!(f, "~{mci} mCi"),
            Self::Range { low, high } => write!(f, "{low}-{high} mCi"),
            Self::UpTo(mci) => write!(f, "up to ~{mci} mCi"),
        }
    }
}

/// Why a band needs more than a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DoseCaveat {
    ClinicalJudgement,
    InstitutionalProtocol,
    CareTeamDecision,
}

/// Dose suggestion for one risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoseAdvice {
    pub category: RiskCategory,
    /// `None` when no numeric band applies.
    pub band: Option<DoseBand>,
    pub text: &'static str,
    pub caveat: Option<DoseCaveat>,
}

/// Lookup from risk category to dose advice.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoseAdvisor;

impl DoseAdvisor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn suggest(&self, category: RiskCategory) -> DoseAdvice {
        let (band, text, caveat) = match category {
            RiskCategory::Low => (
                Some(DoseBand::Approximately(30)),
                "Typical ablation dose ~30 mCi for low-risk patients.",
                None,
            ),
            RiskCategory::Intermediate => (
                Some(DoseBand::Range { low: 50, high: 150 }),
                "Consider 50-150 mCi for intermediate-risk patients; clinical judgement required.",
                Some(DoseCaveat::ClinicalJudgement),
            ),
            RiskCategory::High => (
                Some(DoseBand::UpTo(250)),
                "High-risk patients may require up to ~250 mCi; adjust per institutional protocol.",
                Some(DoseCaveat::InstitutionalProtocol),
            ),
            RiskCategory::Unknown => (
                None,
                "Unknown risk category; dosing must be determined by the care team.",
                Some(DoseCaveat::CareTeamDecision),
            ),
        };

        DoseAdvice {
            category,
            band,
            text,
            caveat,
        }
    }

    /// Normalize a free-form label, then look it up.
    #[must_use]
    pub fn suggest_for_label(&self, label: &str) -> DoseAdvice {
        self.suggest(RiskCategory::from_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_label_maps_to_upper_bound() {
        let advice = DoseAdvisor::new().suggest_for_label("HIGH");
        assert_eq!(advice.category, RiskCategory::High);
        assert_eq!(advice.band, Some(DoseBand::UpTo(250)));
        assert!(advice.text.contains("250 mCi"));
        assert_eq!(advice.caveat, Some(DoseCaveat::InstitutionalProtocol));
    }

    #[test]
    fn test_unknown_label_has_no_numeric_band() {
        let advice = DoseAdvisor::new().suggest_for_label("unknown_value");
        assert_eq!(advice.category, RiskCategory::Unknown);
        assert!(advice.band.is_none());
        assert!(advice.text.contains("determined by the care team"));
    }

    #[test]
    fn test_each_category_has_distinct_advice() {
        let advisor = DoseAdvisor::new();
        let texts: Vec<&str> = RiskCategory::ALL.iter().map(|c| advisor.suggest(*c).text).collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_band_display() {
        assert_eq!(DoseBand::Approximately(30).to_string(), "~30 mCi");
        assert_eq!(DoseBand::Range { low: 50, high: 150 }.to_string(), "50-150 mCi");
        assert_eq!(DoseBand::UpTo(250).to_string(), "up to ~250 mCi");
    }

    #[test]
    fn test_intermediate_requires_judgement() {
        let advice = DoseAdvisor::new().suggest(RiskCategory::Intermediate);
        assert_eq!(advice.band, Some(DoseBand::Range { low: 50, high: 150 }));
        assert_eq!(advice.caveat, Some(DoseCaveat::ClinicalJudgement));
    }
}
