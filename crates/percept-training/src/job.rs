use crate::error::{TrainingError, TrainingResult};
use crate::weights::WeightVector;
use serde::{Deserialize, Serialize};

/// Safety bound on weight updates for a single run.
pub const DEFAULT_MAX_UPDATES: u64 = 10_000;

/// Scalar inputs of one training invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HyperParams {
    /// Learning rate α.
    pub alpha: f64,
    pub initial_weights: WeightVector,
    #[serde(default = "default_max_updates")]
    pub max_updates: u64,
}

fn default_max_updates() -> u64 {
    DEFAULT_MAX_UPDATES
}

impl Default for HyperParams {
    fn default() -> Self {
        Self { alpha: 0.1, initial_weights: WeightVector::zeros(), max_updates: DEFAULT_MAX_UPDATES }
    }
}

impl HyperParams {
    #[must_use]
    pub fn new(alpha: f64, initial_weights: WeightVector) -> Self {
        Self { alpha, initial_weights, max_updates: DEFAULT_MAX_UPDATES }
    }

    #[must_use]
    pub fn with_max_updates(mut self, max_updates: u64) -> Self {
        self.max_updates = max_updates;
        self
    }

    /// Boundary-side sanity check. `train` itself accepts anything.
    pub fn validate(&self) -> TrainingResult<()> {
        if !self.alpha.is_finite() {
            return Err(TrainingError::InvalidParams("alpha must be a finite number".to_string()));
        }
        if !self.initial_weights.is_finite() {
            return Err(TrainingError::InvalidParams("initial weights must be finite numbers".to_string()));
        }
        if self.max_updates == 0 {
            return Err(TrainingError::InvalidParams("max_updates must be >= 1".to_string()));
        }
        Ok(())
    }
}
