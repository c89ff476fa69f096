//! Eligibility rules for radioiodine therapy.
//!
//! Every rule is evaluated against every record, in table order. A rule that
//! fires contributes one [`Issue`]; the overall status is the most severe
//! issue, or [`EligibilityStatus::Eligible`] when nothing fires.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patient::PatientRecord;

/// Minimum TSH (mIU/mL) for adequate radioiodine uptake.
pub const TSH_STIMULATION_THRESHOLD: f64 = 30.0;

/// Eligibility verdict, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    NeedsReview,
    Contraindicated,
}

impl EligibilityStatus {
    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Eligible => "No rule-based concerns - clinician confirmation still required",
            Self::NeedsReview => "Specialist review required before proceeding",
            Self::Contraindicated => "Therapy contraindicated under current conditions",
        }
    }
}

impl fmt::Display for EligibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eligible => write!(f, "ELIGIBLE"),
            Self::NeedsReview => write!(f, "NEEDS REVIEW"),
            Self::Contraindicated => write!(f, "CONTRAINDICATED"),
        }
    }
}

/// Identifies which eligibility rule produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    Pregnancy,
    Breastfeeding,
    GastrointestinalIllness,
    SafetyNonCompliance,
    RenalImpairment,
    InterferingMedication,
    LowIodineDietNotFollowed,
    InsufficientTsh,
}

impl RuleId {
    /// Short stable code for logs and exports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Pregnancy => "CI-PREGNANCY",
            Self::Breastfeeding => "CI-BREASTFEEDING",
            Self::GastrointestinalIllness => "CI-GI-ILLNESS",
            Self::SafetyNonCompliance => "CI-SAFETY",
            Self::RenalImpairment => "NR-RENAL",
            Self::InterferingMedication => "NR-MEDICATION",
            Self::LowIodineDietNotFollowed => "NR-DIET",
            Self::InsufficientTsh => "NR-TSH",
        }
    }
}

/// A triggered rule with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub rule: RuleId,
    pub message: &'static str,
    /// The status this rule alone would produce.
    pub severity: EligibilityStatus,
}

/// One row of the rule table.
#[derive(Clone, Copy)]
pub struct EligibilityRule {
    pub id: RuleId,
    pub severity: EligibilityStatus,
    pub message: &'static str,
    fires: fn(&PatientRecord) -> bool,
}

impl EligibilityRule {
    #[must_use]
    pub fn fires(&self, record: &PatientRecord) -> bool {
        (self.fires)(record)
    }

    fn issue(&self) -> Issue {
        Issue {
            rule: self.id,
            message: self.message,
            severity: self.severity,
        }
    }
}

impl fmt::Debug for EligibilityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EligibilityRule")
            .field("id", &self.id)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Rule table in evaluation order. Output issue order follows this table.
static RULES: [EligibilityRule; 8] = [
    EligibilityRule {
        id: RuleId::Pregnancy,
        severity: EligibilityStatus::Contraindicated,
        message: "Pregnancy is an absolute contraindication to I-131 therapy.",
        fires: |r| r.flags().pregnant,
    },
    EligibilityRule {
        id: RuleId::Breastfeeding,
        severity: EligibilityStatus::Contraindicated,
        message: "Breastfeeding is an absolute contraindication to I-131 therapy.",
        fires: |r| r.flags().breastfeeding,
    },
    EligibilityRule {
        id: RuleId::GastrointestinalIllness,
        severity: EligibilityStatus::Contraindicated,
        message: "Severe vomiting/diarrhea hinders iodine absorption and is a contraindication.",
        fires: |r| r.flags().vomiting_or_diarrhea,
    },
    EligibilityRule {
        id: RuleId::SafetyNonCompliance,
        severity: EligibilityStatus::Contraindicated,
        message: "Inability to comply with radiation-safety instructions is a contraindication.",
        fires: |r| !r.flags().can_follow_safety_instructions,
    },
    EligibilityRule {
        id: RuleId::RenalImpairment,
        severity: EligibilityStatus::NeedsReview,
        message: "Impaired renal function may delay clearance of radioiodine; requires specialist review.",
        fires: |r| !r.flags().renal_function_ok,
    },
    EligibilityRule {
        id: RuleId::InterferingMedication,
        severity: EligibilityStatus::NeedsReview,
        message: "Interfering medications or recent iodinated contrast may reduce efficacy.",
        fires: |r| r.flags().on_interfering_medications,
    },
    EligibilityRule {
        id: RuleId::LowIodineDietNotFollowed,
        severity: EligibilityStatus::NeedsReview,
        message: "Patient has not followed a low-iodine diet; consider postponing therapy.",
        fires: |r| !r.flags().followed_low_iodine_diet,
    },
    EligibilityRule {
        id: RuleId::InsufficientTsh,
        severity: EligibilityStatus::NeedsReview,
        message: "TSH is below 30 mIU/mL; therapy is less effective.",
        fires: |r| r.tsh() < TSH_STIMULATION_THRESHOLD,
    },
];

/// Status plus the issues that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityAssessment {
    pub status: EligibilityStatus,
    /// Fired rules, in rule-table order.
    pub issues: Vec<Issue>,
}

impl EligibilityAssessment {
    /// True only when no rule fired at all.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.status == EligibilityStatus::Eligible && self.issues.is_empty()
    }
}

/// Stateless evaluator for the rule table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityEngine;

impl EligibilityEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The rule table, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &'static [EligibilityRule] {
        &RULES
    }

    /// Evaluate every rule against the record.
    ///
    /// Never fails. A contraindication is never downgraded by a later,
    /// less severe rule.
    #[must_use]
    pub fn evaluate(&self, record: &PatientRecord) -> EligibilityAssessment {
        let issues: Vec<Issue> = RULES
            .iter()
            .filter(|rule| rule.fires(record))
            .map(EligibilityRule::issue)
            .collect();

        let status = issues
            .iter()
            .map(|issue| issue.severity)
            .max()
            .unwrap_or(EligibilityStatus::Eligible);

        EligibilityAssessment { status, issues }
    }
}
