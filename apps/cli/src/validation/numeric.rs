//! Decimal parsing for α and the initial weights.

use percept_training::{TrainingError, WeightVector};
use thiserror::Error;

/// Field labels, as shown to the user.
pub const ALPHA_FIELD: &str = "α (learning rate)";
pub const WEIGHT_FIELDS: [&str; 3] = ["w0", "w1", "w2"];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("The field '{field}' must be numeric.")]
    InvalidNumeric { field: String },

    #[error(transparent)]
    Rejected(#[from] TrainingError),
}

/// Parses user text as a real number.
///
/// Surrounding whitespace is ignored and a comma decimal separator is
/// accepted (`0,5` == `0.5`). `inf` and `NaN` are not numbers here.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64, InputError> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumeric { field: field.to_string() }),
    }
}

/// The four scalar text fields before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInputs {
    pub alpha: String,
    pub weights: [String; 3],
}

impl RawInputs {
    /// Parses α, then w0, w1, w2, stopping at the first invalid field.
    pub fn parse(&self) -> Result<(f64, WeightVector), InputError> {
        let alpha = parse_decimal(ALPHA_FIELD, &self.alpha)?;
        let w0 = parse_decimal(WEIGHT_FIELDS[0], &self.weights[0])?;
        let w1 = parse_decimal(WEIGHT_FIELDS[1], &self.weights[1])?;
        let w2 = parse_decimal(WEIGHT_FIELDS[2], &self.weights[2])?;
        Ok((alpha, WeightVector::new(w0, w1, w2)))
    }
}
