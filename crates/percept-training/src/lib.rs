//! Percept Training
//!
//! Bipolar (±1) perceptron primitives for:
//! - Building the AND/OR truth tables (`TruthTable`)
//! - Running the reset-by-error learning rule (`train`)
//! - Rendering the step-by-step decision trace (`TraceLanguage`)

pub mod activation;
pub mod dataset;
pub mod error;
pub mod job;
pub mod trace;
pub mod trainer;
pub mod weights;

pub use activation::bipolar_step;
pub use dataset::{BiasSign, Bipolar, TargetFunction, TrainingExample, TruthTable};
pub use error::{TrainingError, TrainingResult};
pub use job::{HyperParams, DEFAULT_MAX_UPDATES};
pub use trace::TraceLanguage;
pub use trainer::{train, train_function, Termination, TrainingOutcome};
pub use weights::WeightVector;
