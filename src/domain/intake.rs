//! Raw intake answers and their validation into a [`PatientRecord`].
//!
//! Both the terminal form and the JSON command-line tool fill a
//! [`PatientIntake`]; nothing reaches the eligibility engine without going
//! through [`PatientIntake::validate`].

use serde::{Deserialize, Deserializer, Serialize};

use super::patient::{ClinicalFlags, PatientRecord, RiskCategory, Sex};
use super::validation::{ValidationError, ValidationErrors};

/// Ages above this are treated as a data-entry error.
pub const MAX_AGE: i64 = 150;

/// One intake question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeField {
    Age,
    Sex,
    Tsh,
    Pregnant,
    Breastfeeding,
    VomitingOrDiarrhea,
    LowIodineDiet,
    RenalFunctionOk,
    InterferingMedications,
    CanFollowSafetyInstructions,
    RiskCategory,
}

impl IntakeField {
    /// Short label shown next to the answer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        INTAKE_QUESTIONS[self as usize].label
    }
}

/// Prompt metadata for a question, in intake order.
#[derive(Debug, Clone, Copy)]
pub struct IntakeQuestion {
    pub field: IntakeField,
    pub label: &'static str,
    pub prompt: &'static str,
    pub hint: &'static str,
}

/// The intake questionnaire, in the order it is asked.
pub const INTAKE_QUESTIONS: [IntakeQuestion; 11] = [
    IntakeQuestion {
        field: IntakeField::Age,
        label: "Age",
        prompt: "Enter patient age (in years)",
        hint: "years",
    },
    IntakeQuestion {
        field: IntakeField::Sex,
        label: "Sex",
        prompt: "Enter patient sex (M/F)",
        hint: "M/F",
    },
    IntakeQuestion {
        field: IntakeField::Tsh,
        label: "TSH",
        prompt: "Enter TSH value (mIU/mL)",
        hint: "mIU/mL",
    },
    IntakeQuestion {
        field: IntakeField::Pregnant,
        label: "Pregnant",
        prompt: "Is the patient currently pregnant?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::Breastfeeding,
        label: "Breastfeeding",
        prompt: "Is the patient breastfeeding?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::VomitingOrDiarrhea,
        label: "Vomiting/Diarrhea",
        prompt: "Does the patient have severe vomiting or diarrhea that would prevent therapy?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::LowIodineDiet,
        label: "Low-Iodine Diet",
        prompt: "Has the patient followed a low-iodine diet for 1-2 weeks?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::RenalFunctionOk,
        label: "Renal Function OK",
        prompt: "Is the patient's renal function adequate (eGFR/creatinine normal)?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::InterferingMedications,
        label: "Interfering Meds",
        prompt: "Is the patient taking interfering medications (e.g., amiodarone or recent iodinated contrast)?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::CanFollowSafetyInstructions,
        label: "Can Follow Safety",
        prompt: "Can the patient comply with radiation-safety instructions (isolation, hygiene)?",
        hint: "y/n",
    },
    IntakeQuestion {
        field: IntakeField::RiskCategory,
        label: "Risk Category",
        prompt: "Risk category (low, intermediate, high) based on tumor factors",
        hint: "low/intermediate/high",
    },
];

/// Unvalidated intake answers, one string per question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientIntake {
    #[serde(deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sex: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tsh: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pregnant: String,
    #[serde(deserialize_with = "lenient_string")]
    pub breastfeeding: String,
    #[serde(deserialize_with = "lenient_string")]
    pub vomiting_or_diarrhea: String,
    #[serde(deserialize_with = "lenient_string")]
    pub followed_low_iodine_diet: String,
    #[serde(deserialize_with = "lenient_string")]
    pub renal_function_ok: String,
    #[serde(deserialize_with = "lenient_string")]
    pub on_interfering_medications: String,
    #[serde(deserialize_with = "lenient_string")]
    pub can_follow_safety_instructions: String,
    #[serde(deserialize_with = "lenient_string")]
    pub risk_category: String,
}

/// JSON scalars accepted for any intake answer.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Flag(bool),
    Int(i64),
    Float(f64),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    // `null` reads as an unanswered question.
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Flag(true)) => "y".to_string(),
        Some(Scalar::Flag(false)) => "n".to_string(),
        Some(Scalar::Int(i)) => i.to_string(),
        Some(Scalar::Float(f)) => f.to_string(),
    })
}

fn parse_answer(field: IntakeField, raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Ok(true),
        "n" | "no" | "false" | "0" => Ok(false),
        _ => Err(ValidationError::InvalidAnswer {
            field,
            value: raw.trim().to_string(),
        }),
    }
}

fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    let age: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidAge(trimmed.to_string()))?;

    if age < 0 {
        return Err(ValidationError::NegativeAge(age));
    }
    if age > MAX_AGE {
        return Err(ValidationError::ImplausibleAge(age));
    }
    u32::try_from(age).map_err(|_| ValidationError::ImplausibleAge(age))
}

fn parse_tsh(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    let tsh: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidTsh(trimmed.to_string()))?;

    if !tsh.is_finite() {
        return Err(ValidationError::InvalidTsh(trimmed.to_string()));
    }
    if tsh < 0.0 {
        return Err(ValidationError::NegativeTsh(tsh));
    }
    // "-0" parses to -0.0
    Ok(tsh.abs())
}

fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn parse_risk_category(raw: &str) -> Result<RiskCategory, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyRiskCategory);
    }
    Ok(RiskCategory::from_label(raw))
}

impl PatientIntake {
    /// A complete intake with no eligibility concerns (low-risk, TSH 35).
    #[must_use]
    pub fn sample() -> Self {
        Self {
            age: "45".to_string(),
            sex: "F".to_string(),
            tsh: "35".to_string(),
            pregnant: "n".to_string(),
            breastfeeding: "n".to_string(),
            vomiting_or_diarrhea: "n".to_string(),
            followed_low_iodine_diet: "y".to_string(),
            renal_function_ok: "y".to_string(),
            on_interfering_medications: "n".to_string(),
            can_follow_safety_instructions: "y".to_string(),
            risk_category: "low".to_string(),
        }
    }

    #[must_use]
    pub fn answer(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::Age => &self.age,
            IntakeField::Sex => &self.sex,
            IntakeField::Tsh => &self.tsh,
            IntakeField::Pregnant => &self.pregnant,
            IntakeField::Breastfeeding => &self.breastfeeding,
            IntakeField::VomitingOrDiarrhea => &self.vomiting_or_diarrhea,
            IntakeField::LowIodineDiet => &self.followed_low_iodine_diet,
            IntakeField::RenalFunctionOk => &self.renal_function_ok,
            IntakeField::InterferingMedications => &self.on_interfering_medications,
            IntakeField::CanFollowSafetyInstructions => &self.can_follow_safety_instructions,
            IntakeField::RiskCategory => &self.risk_category,
        }
    }

    pub fn answer_mut(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::Age => &mut self.age,
            IntakeField::Sex => &mut self.sex,
            IntakeField::Tsh => &mut self.tsh,
            IntakeField::Pregnant => &mut self.pregnant,
            IntakeField::Breastfeeding => &mut self.breastfeeding,
            IntakeField::VomitingOrDiarrhea => &mut self.vomiting_or_diarrhea,
            IntakeField::LowIodineDiet => &mut self.followed_low_iodine_diet,
            IntakeField::RenalFunctionOk => &mut self.renal_function_ok,
            IntakeField::InterferingMedications => &mut self.on_interfering_medications,
            IntakeField::CanFollowSafetyInstructions => &mut self.can_follow_safety_instructions,
            IntakeField::RiskCategory => &mut self.risk_category,
        }
    }

    /// Validate every answer and build the record.
    ///
    /// All fields are checked; the error lists every malformed answer.
    ///
    /// # Errors
    /// Returns [`ValidationErrors`] if any answer is malformed. No partial
    /// record is produced.
    pub fn validate(&self) -> Result<PatientRecord, ValidationErrors> {
        let mut errors = Vec::new();

        let e = &mut errors;

        let age = collect(e, parse_age(&self.age));
        let sex = collect(e, Sex::parse(&self.sex));
        let tsh = collect(e, parse_tsh(&self.tsh));
        let mut answer = |field: IntakeField| collect(e, parse_answer(field, self.answer(field)));
        let pregnant = answer(IntakeField::Pregnant);
        let breastfeeding = answer(IntakeField::Breastfeeding);
        let vomiting_or_diarrhea = answer(IntakeField::VomitingOrDiarrhea);
        let followed_low_iodine_diet = answer(IntakeField::LowIodineDiet);
        let renal_function_ok = answer(IntakeField::RenalFunctionOk);
        let on_interfering_medications = answer(IntakeField::InterferingMedications);
        let can_follow_safety_instructions = answer(IntakeField::CanFollowSafetyInstructions);

        let risk_category = collect(e, parse_risk_category(&self.risk_category));

        match (
            age,
            sex,
            tsh,
            pregnant,
            breastfeeding,
            vomiting_or_diarrhea,
            followed_low_iodine_diet,
            renal_function_ok,
            on_interfering_medications,
            can_follow_safety_instructions,
            risk_category,
        ) {
            (
                Some(age),
                Some(sex),
                Some(tsh),
                Some(pregnant),
                Some(breastfeeding),
                Some(vomiting_or_diarrhea),
                Some(followed_low_iodine_diet),
                Some(renal_function_ok),
                Some(on_interfering_medications),
                Some(can_follow_safety_instructions),
                Some(risk_category),
            ) => {
                let flags = ClinicalFlags {
                    pregnant,
                    breastfeeding,
                    vomiting_or_diarrhea,
                    followed_low_iodine_diet,
                    renal_function_ok,
                    on_interfering_medications,
                    can_follow_safety_instructions,
                };
                Ok(PatientRecord::new(age, sex, tsh, flags, risk_category)?)
            }
            _ => Err(ValidationErrors::new(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_intake_is_valid() {
        let record = PatientIntake::sample().validate().expect("Sample should validate");
        assert_eq!(record.age(), 45);
        assert_eq!(record.sex(), Sex::Female);
        assert_eq!(record.risk_category(), RiskCategory::Low);
        assert_eq!(*record.flags(), ClinicalFlags::all_clear());
    }

    #[test]
    fn test_collects_every_malformed_field() {
        let intake = PatientIntake {
            age: "forty".to_string(),
            tsh: "high".to_string(),
            pregnant: "maybe".to_string(),
            risk_category: "  ".to_string(),
            ..PatientIntake::sample()
        };

        let errors = intake.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.errors()[0], ValidationError::InvalidAge("forty".to_string()));
        assert_eq!(errors.errors()[1], ValidationError::InvalidTsh("high".to_string()));
        assert!(matches!(
            &errors.errors()[2],
            ValidationError::InvalidAnswer { field: IntakeField::Pregnant, .. }
        ));
        assert_eq!(errors.errors()[3], ValidationError::EmptyRiskCategory);
    }

    #[test]
    fn test_age_bounds() {
        let negative = PatientIntake {
            age: "-3".to_string(),
            ..PatientIntake::sample()
        };
        assert_eq!(
            negative.validate().expect_err("negative").errors(),
            &[ValidationError::NegativeAge(-3)]
        );

        let implausible = PatientIntake {
            age: "200".to_string(),
            ..PatientIntake::sample()
        };
        assert!(implausible.validate().is_err());

        let decimal = PatientIntake {
            age: "45.5".to_string(),
            ..PatientIntake::sample()
        };
        assert!(decimal.validate().is_err());
    }

    #[test]
    fn test_tsh_rejects_negative_and_non_finite() {
        for raw in ["-0.5", "NaN", "inf"] {
            let intake = PatientIntake {
                tsh: raw.to_string(),
                ..PatientIntake::sample()
            };
            assert!(intake.validate().is_err(), "TSH {raw} should be rejected");
        }
    }

    #[test]
    fn test_answers_are_case_insensitive() {
        let intake = PatientIntake {
            pregnant: "YES".to_string(),
            renal_function_ok: "No".to_string(),
            ..PatientIntake::sample()
        };
        let record = intake.validate().expect("Should validate");
        assert!(record.flags().pregnant);
        assert!(!record.flags().renal_function_ok);
    }

    #[test]
    fn test_unrecognized_risk_category_is_not_an_error() {
        let intake = PatientIntake {
            risk_category: "unknown_value".to_string(),
            ..PatientIntake::sample()
        };
        let record = intake.validate().expect("Should validate");
        assert_eq!(record.risk_category(), RiskCategory::Unknown);
    }

    #[test]
    fn test_deserialize_native_json_values() {
        let json = r#"{
            "age": 62,
            "sex": "m",
            "tsh": 41.5,
            "pregnant": false,
            "breastfeeding": "n",
            "vomiting_or_diarrhea": false,
            "followed_low_iodine_diet": true,
            "renal_function_ok": "yes",
            "on_interfering_medications": false,
            "can_follow_safety_instructions": true,
            "risk_category": "High"
        }"#;

        let intake: PatientIntake = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(intake.age, "62");
        assert_eq!(intake.pregnant, "n");

        let record = intake.validate().expect("Should validate");
        assert_eq!(record.sex(), Sex::Male);
        assert!((record.tsh() - 41.5).abs() < f64::EPSILON);
        assert_eq!(record.risk_category(), RiskCategory::High);
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let intake: PatientIntake = serde_json::from_str(r#"{"age": 30}"#).expect("Should deserialize");
        let errors = intake.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 10);
    }

    #[test]
    fn test_null_answer_is_reported_as_field_error() {
        let mut value = serde_json::to_value(PatientIntake::sample()).expect("Should serialize");
        value["pregnant"] = serde_json::Value::Null;

        let intake: PatientIntake = serde_json::from_value(value).expect("Should deserialize");
        assert_eq!(intake.pregnant, "");

        let errors = intake.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors.errors()[0],
            ValidationError::InvalidAnswer { field: IntakeField::Pregnant, .. }
        ));
    }

    #[test]
    fn test_negative_zero_tsh_is_stored_as_zero() {
        let intake = PatientIntake {
            tsh: "-0".to_string(),
            ..PatientIntake::sample()
        };
        let record = intake.validate().expect("Should validate");
        assert_eq!(record.tsh(), 0.0);
        assert!(record.tsh().is_sign_positive());
    }

    #[test]
    fn test_errors_display_joins_every_field() {
        let intake = PatientIntake {
            age: "x".to_string(),
            risk_category: String::new(),
            ..PatientIntake::sample()
        };
        let message = intake.validate().expect_err("Should reject").to_string();
        assert_eq!(message, "Age: 'x' is not a whole number, Risk category is required");
    }

    #[test]
    fn test_fields_index_their_questions() {
        for (i, q) in INTAKE_QUESTIONS.iter().enumerate() {
            assert_eq!(q.field as usize, i);
            assert_eq!(q.field.label(), q.label);
        }
    }

    #[test]
    fn test_answer_accessors_follow_question_order() {
        let mut intake = PatientIntake::default();
        for (i, q) in INTAKE_QUESTIONS.iter().enumerate() {
            intake.answer_mut(q.field).push_str(&i.to_string());
        }
        for (i, q) in INTAKE_QUESTIONS.iter().enumerate() {
            assert_eq!(intake.answer(q.field), i.to_string());
        }
    }
}
