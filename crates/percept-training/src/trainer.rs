use crate::activation::bipolar_step;
use crate::dataset::{BiasSign, Bipolar, TargetFunction, TruthTable};
use crate::job::HyperParams;
use crate::trace::{TraceLanguage, TraceWriter};
use crate::weights::WeightVector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Why a training run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A full pass over the table finished without a single error.
    Converged,
    /// `max_updates` was reached first.
    CapReached,
}

/// Everything a caller gets back from one training invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOutcome {
    pub function_name: String,
    pub trace: String,
    /// Number of weight updates actually applied.
    pub update_count: u64,
    /// Iteration number printed in the trace summary (`update_count + 1`).
    pub iterations: u64,
    pub final_weights: WeightVector,
    pub termination: Termination,
}

impl TrainingOutcome {
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}

/// Mutable state of a single run. Lives only inside [`train`].
struct TrainingRun {
    alpha: f64,
    weights: WeightVector,
    cursor: usize,
    iteration: u64,
    updates: u64,
    max_updates: u64,
    trace: TraceWriter,
}

impl TrainingRun {
    fn new(params: &HyperParams, language: TraceLanguage) -> Self {
        Self {
            alpha: params.alpha,
            weights: params.initial_weights,
            cursor: 0,
            iteration: 1,
            updates: 0,
            max_updates: params.max_updates,
            trace: TraceWriter::new(language),
        }
    }

    fn run(mut self, function_name: &str, table: &TruthTable) -> TrainingOutcome {
        self.trace.header(function_name, table, &self.weights, self.alpha);
        self.trace.iteration_start(self.iteration);

        let termination = loop {
            let example = table[self.cursor];
            let inputs = example.inputs();
            let output = bipolar_step(self.weights.net(inputs));
            let error = example.desired.value() - output.value();
            self.trace.decision(self.cursor, &example, output, error);

            if error == 0 {
                self.trace.correct();
                self.cursor += 1;
                if self.cursor == table.len() {
                    self.trace.clean_pass(self.iteration);
                    break Termination::Converged;
                }
                continue;
            }

            // A zero cap allows no update at all.
            if self.updates >= self.max_updates {
                self.trace.cap_reached();
                break Termination::CapReached;
            }

            self.weights = self.weights.updated(self.alpha, f64::from(error), inputs);
            self.updates += 1;
            debug!(
                iteration = self.iteration,
                example = self.cursor + 1,
                error,
                weights = ?self.weights,
                "Weights updated"
            );

            let raised = example.desired == Bipolar::Positive && output == Bipolar::Negative;
            self.trace.incorrect(raised, &self.weights, self.iteration);
            self.iteration += 1;

            if self.updates >= self.max_updates {
                self.trace.cap_reached();
                break Termination::CapReached;
            }

            self.trace.iteration_start(self.iteration);
            self.cursor = 0;
        };

        info!(
            function = function_name,
            updates = self.updates,
            iterations = self.iteration,
            termination = ?termination,
            "Training finished"
        );

        TrainingOutcome {
            function_name: function_name.to_string(),
            trace: self.trace.finish(self.iteration, &self.weights),
            update_count: self.updates,
            iterations: self.iteration,
            final_weights: self.weights,
            termination,
        }
    }
}

/// Runs the bipolar perceptron rule with reset-by-error over `table`.
///
/// Every misclassification updates the weights and restarts the scan from
/// the first row. The run ends after a complete error-free pass or once
/// `params.max_updates` updates have been applied, whichever comes first.
pub fn train(
    function_name: &str,
    table: &TruthTable,
    params: &HyperParams,
    language: TraceLanguage,
) -> TrainingOutcome {
    TrainingRun::new(params, language).run(function_name, table)
}

/// Builds the truth table of `function` and trains on it.
pub fn train_function(
    function: TargetFunction,
    bias: BiasSign,
    params: &HyperParams,
    language: TraceLanguage,
) -> TrainingOutcome {
    let table = TruthTable::build(function, bias);
    train(function.name(), &table, params, language)
}
