use serde::{Deserialize, Serialize};
use std::fmt;

/// One weight per input dimension: bias, `x1`, `x2`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightVector {
    pub w0: f64,
    pub w1: f64,
    pub w2: f64,
}

impl WeightVector {
    #[must_use]
    pub const fn new(w0: f64, w1: f64, w2: f64) -> Self {
        Self { w0, w1, w2 }
    }

    #[must_use]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.w0, self.w1, self.w2]
    }

    /// Weighted sum of `inputs` (bias first).
    #[must_use]
    pub fn net(&self, inputs: [f64; 3]) -> f64 {
        self.w0 * inputs[0] + self.w1 * inputs[1] + self.w2 * inputs[2]
    }

    /// Perceptron rule `w_k += alpha * error * x_k`, all three components at once.
    #[must_use]
    pub fn updated(&self, alpha: f64, error: f64, inputs: [f64; 3]) -> Self {
        Self {
            w0: self.w0 + alpha * error * inputs[0],
            w1: self.w1 + alpha * error * inputs[1],
            w2: self.w2 + alpha * error * inputs[2],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|w| w.is_finite())
    }

    /// Signed six-decimal form used for freshly updated weights.
    #[must_use]
    pub fn signed(&self) -> String {
        format!("w0={:+.6}, w1={:+.6}, w2={:+.6}", self.w0, self.w1, self.w2)
    }
}

impl From<[f64; 3]> for WeightVector {
    fn from(w: [f64; 3]) -> Self {
        Self::new(w[0], w[1], w[2])
    }
}

/// `w0=0.000000, w1=0.000000, w2=0.000000`
impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w0={:.6}, w1={:.6}, w2={:.6}", self.w0, self.w1, self.w2)
    }
}
