//! Training command implementation.

use anyhow::{Context, Result};
use percept_training::{train_function, HyperParams, TrainingOutcome};

use crate::colors::PerceptColors;
use crate::commands::types::{FunctionChoice, TrainArgs};
use crate::config::{OutputFormat, PerceptConfig};
use crate::render;
use crate::validation::RawInputs;

pub fn execute(args: TrainArgs, config: &PerceptConfig) -> Result<()> {
    let outcomes = run(&args, config)?;

    let json_output = args.json || config.output.format == OutputFormat::Json;
    if json_output {
        let rendered = match outcomes.as_slice() {
            [single] => serde_json::to_string_pretty(single)?,
            many => serde_json::to_string_pretty(many)?,
        };
        println!("{rendered}");
        return Ok(());
    }

    let colors = PerceptColors::new();
    for outcome in &outcomes {
        render::print_outcome(outcome, !args.quiet, &colors);
    }
    Ok(())
}

/// Validates the raw inputs and trains on every selected function.
pub fn run(args: &TrainArgs, config: &PerceptConfig) -> Result<Vec<TrainingOutcome>> {
    let [d0, d1, d2] = config.weight_texts();
    let raw = RawInputs {
        alpha: args.alpha.clone().unwrap_or_else(|| config.alpha_text()),
        weights: [
            args.w0.clone().unwrap_or(d0),
            args.w1.clone().unwrap_or(d1),
            args.w2.clone().unwrap_or(d2),
        ],
    };
    let (alpha, initial_weights) = raw.parse()?;

    let params = HyperParams::new(alpha, initial_weights)
        .with_max_updates(args.max_updates.unwrap_or_else(|| config.max_updates()));
    params.validate().context("Refusing to train")?;

    let choice = args.function.unwrap_or_else(|| FunctionChoice::from(config.function()));
    let bias = args.bias.unwrap_or_else(|| config.bias());
    let language = args.language.unwrap_or_else(|| config.language());

    tracing::debug!(?choice, %bias, alpha, weights = %initial_weights, "Starting training");

    Ok(choice.functions().iter().map(|&function| train_function(function, bias, &params, language)).collect())
}
