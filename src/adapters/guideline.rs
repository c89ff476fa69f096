//! Static guidance text from published radioiodine therapy guidelines.

use crate::domain::{GuidanceKind, GuidanceSection};
use crate::ports::GuidanceCatalog;

const PREPARATION_ITEMS: [&str; 7] = [
    "Follow a low-iodine diet for 1-2 weeks before therapy (avoid iodized salt, seafood, dairy, certain vegetables).",
    "Achieve TSH >= 30 mIU/mL by withdrawing thyroid hormone or using recombinant human TSH.",
    "Fast for 2-4 hours before and 1 hour after taking I-131.",
    "Ensure adequate hydration; drink plenty of water and void frequently.",
    "Obtain baseline labs (CBC, creatinine/eGFR, liver function tests, thyroglobulin, TSH) and a pregnancy test for women of childbearing age.",
    "Perform diagnostic radioiodine imaging to assess residual disease.",
    "Plan for isolation: arrange a private room at the hospital or at home and ensure you can follow radiation-safety instructions.",
];

const SIDE_EFFECT_ITEMS: [&str; 4] = [
    "Acute: nausea, vomiting, taste changes (dysgeusia), neck pain, salivary gland inflammation leading to sialadenitis and xerostomia.",
    "Chronic: reduced salivary output and chronic xerostomia in ~10% of patients; reduced male fertility and other long-term effects.",
    "Laboratory: transient platelet and leukocyte decrease at 4 weeks with recovery by 8 weeks.",
    "Rare: nasolacrimal duct obstruction, lung fibrosis, secondary malignancies.",
];

const POST_THERAPY_ITEMS: [&str; 8] = [
    "Maintain at least a 3-foot distance from others, especially children and pregnant women.",
    "Sleep in a separate bed and avoid physical contact (kissing, hugging).",
    "Use a separate bathroom if possible; flush twice after use and wash hands thoroughly.",
    "Wash clothes, bedding, and utensils separately.",
    "Stay well-hydrated and chew sugar-free candy or gum to stimulate salivary flow and reduce dry mouth.",
    "Avoid contact with pets and public transit; drive home alone or sit as far from others as possible.",
    "Carry your treatment record when travelling; airport detectors may detect radiation.",
    "Use effective contraception for 6-12 months (women) or discuss sperm banking if multiple treatments are anticipated.",
];

/// Built-in guidance catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidelineCatalog;

impl GuidelineCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GuidanceCatalog for GuidelineCatalog {
    fn preparation(&self) -> GuidanceSection {
        GuidanceSection::new(
            GuidanceKind::Preparation,
            "Preparation Guidance",
            &PREPARATION_ITEMS,
        )
    }

    fn side_effects(&self) -> GuidanceSection {
        GuidanceSection::new(
            GuidanceKind::SideEffects,
            "Common Side Effects and Adverse Events",
            &SIDE_EFFECT_ITEMS,
        )
        .with_closing_note("Report any severe or persistent symptoms to your care team immediately.")
    }

    fn post_therapy(&self) -> GuidanceSection {
        GuidanceSection::new(
            GuidanceKind::PostTherapy,
            "Post-Therapy Instructions (first 3-4 days)",
            &POST_THERAPY_ITEMS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_tagged_with_their_kind() {
        let catalog = GuidelineCatalog::new();
        for kind in GuidanceKind::ALL {
            assert_eq!(catalog.section(kind).kind, kind);
        }
    }

    #[test]
    fn test_section_lengths() {
        let catalog = GuidelineCatalog::new();
        assert_eq!(catalog.preparation().items.len(), 7);
        assert_eq!(catalog.side_effects().items.len(), 4);
        assert_eq!(catalog.post_therapy().items.len(), 8);
        assert!(catalog.side_effects().closing_note.is_some());
        assert!(catalog.preparation().closing_note.is_none());
    }

    #[test]
    fn test_preparation_mentions_tsh_target() {
        let prep = GuidelineCatalog::new().preparation();
        assert!(prep.items.iter().any(|i| i.contains("TSH >= 30")));
    }
}
