//! Patient record types for radioiodine eligibility screening.
//!
//! A [`PatientRecord`] is built once per assessment from already-validated
//! values and is never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Biological sex as recorded at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Normalize an intake answer ("M", "f", "female", ...).
    ///
    /// # Errors
    /// Returns [`ValidationError::UnrecognizedSex`] for anything else.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(ValidationError::UnrecognizedSex(raw.trim().to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "M"),
            Self::Female => write!(f, "F"),
        }
    }
}

/// Tumour-based risk stratification used for dose selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Intermediate,
    High,
    /// Any label the intake did not recognize.
    Unknown,
}

impl RiskCategory {
    pub const ALL: [Self; 4] = [Self::Low, Self::Intermediate, Self::High, Self::Unknown];

    /// Normalize a free-form label. Unrecognized labels map to `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "intermediate" => Self::Intermediate,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Intermediate => write!(f, "INTERMEDIATE"),
            Self::High => write!(f, "HIGH"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// Yes/no answers collected at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalFlags {
    pub pregnant: bool,
    pub breastfeeding: bool,
    /// Severe vomiting or diarrhea that would prevent therapy
    pub vomiting_or_diarrhea: bool,
    /// Low-iodine diet for 1-2 weeks before therapy
    pub followed_low_iodine_diet: bool,
    /// eGFR / creatinine within normal limits
    pub renal_function_ok: bool,
    /// e.g. amiodarone or recent iodinated contrast
    pub on_interfering_medications: bool,
    /// Patient can comply with isolation and hygiene instructions
    pub can_follow_safety_instructions: bool,
}

impl ClinicalFlags {
    /// Every flag at its safe value. No eligibility rule fires on these flags.
    #[must_use]
    pub const fn all_clear() -> Self {
        Self {
            pregnant: false,
            breastfeeding: false,
            vomiting_or_diarrhea: false,
            followed_low_iodine_diet: true,
            renal_function_ok: true,
            on_interfering_medications: false,
            can_follow_safety_instructions: true,
        }
    }
}

/// Validated patient attributes for one assessment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    age: u32,
    sex: Sex,
    tsh: f64,
    flags: ClinicalFlags,
    risk_category: RiskCategory,
}

impl PatientRecord {
    /// Build a record from already-typed values.
    ///
    /// # Errors
    /// Returns an error if `tsh` is negative or not finite.
    pub fn new(
        age: u32,
        sex: Sex,
        tsh: f64,
        flags: ClinicalFlags,
        risk_category: RiskCategory,
    ) -> Result<Self, ValidationError> {
        if !tsh.is_finite() {
            return Err(ValidationError::InvalidTsh(tsh.to_string()));
        }
        if tsh < 0.0 {
            return Err(ValidationError::NegativeTsh(tsh));
        }

        Ok(Self {
            age,
            sex,
            tsh,
            flags,
            risk_category,
        })
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// TSH in mIU/mL.
    #[must_use]
    pub fn tsh(&self) -> f64 {
        self.tsh
    }

    #[must_use]
    pub fn flags(&self) -> &ClinicalFlags {
        &self.flags
    }

    #[must_use]
    pub fn risk_category(&self) -> RiskCategory {
        self.risk_category
    }
}
