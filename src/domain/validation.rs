//! Intake validation errors.

use super::intake::IntakeField;

/// A single malformed intake field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Age: '{0}' is not a whole number")]
    InvalidAge(String),

    #[error("Age: {0} cannot be negative")]
    NegativeAge(i64),

    #[error("Age: {0} is above the accepted maximum of 150")]
    ImplausibleAge(i64),

    #[error("TSH: '{0}' is not a number")]
    InvalidTsh(String),

    #[error("TSH: {0} cannot be negative")]
    NegativeTsh(f64),

    #[error("Sex: '{0}' must be M or F")]
    UnrecognizedSex(String),

    #[error("{}: '{value}' must be y or n", .field.label())]
    InvalidAnswer { field: IntakeField, value: String },

    #[error("Risk category is required")]
    EmptyRiskCategory,
}

impl ValidationError {
    /// The intake question this error belongs to.
    #[must_use]
    pub fn field(&self) -> IntakeField {
        match self {
            Self::InvalidAge(_) | Self::NegativeAge(_) | Self::ImplausibleAge(_) => IntakeField::Age,
            Self::InvalidTsh(_) | Self::NegativeTsh(_) => IntakeField::Tsh,
            Self::UnrecognizedSex(_) => IntakeField::Sex,
            Self::InvalidAnswer { field, .. } => *field,
            Self::EmptyRiskCategory => IntakeField::RiskCategory,
        }
    }
}

/// Every field error found in one intake.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}
