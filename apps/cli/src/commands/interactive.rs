//! Interactive training session.
//!
//! A form-like loop: four text fields (α and the three initial weights), a
//! bias selector, a Train action and the trace with its summary labels.
//! Field values persist between runs.

use std::fmt;

use anyhow::Result;
use colored::Colorize;
use inquire::{InquireError, Select};
use percept_training::{train_function, Bipolar, HyperParams, TargetFunction, TraceLanguage, TrainingOutcome, TruthTable};

use crate::colors::PerceptColors;
use crate::config::PerceptConfig;
use crate::render;
use crate::validation::numeric::{ALPHA_FIELD, WEIGHT_FIELDS};
use crate::validation::{prompt_decimal, InputError, RawInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Train,
    ShowTable,
    SwitchBias,
    SwitchFunction,
    Quit,
}

impl MenuAction {
    const ALL: [Self; 5] = [Self::Train, Self::ShowTable, Self::SwitchBias, Self::SwitchFunction, Self::Quit];
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Train => "Train",
            Self::ShowTable => "Show activation table",
            Self::SwitchBias => "Switch bias (X0)",
            Self::SwitchFunction => "Switch function (AND/OR)",
            Self::Quit => "Quit",
        })
    }
}

/// State of the form between actions.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub function: TargetFunction,
    pub bias: Bipolar,
    pub inputs: RawInputs,
    pub max_updates: u64,
    pub language: TraceLanguage,
    pub runs: usize,
}

impl Session {
    pub fn new(function: TargetFunction, config: &PerceptConfig) -> Self {
        Self {
            function,
            bias: config.bias(),
            inputs: RawInputs { alpha: config.alpha_text(), weights: config.weight_texts() },
            max_updates: config.max_updates(),
            language: config.language(),
            runs: 0,
        }
    }

    pub fn switch_bias(&mut self) {
        self.bias = self.bias.flipped();
    }

    pub fn switch_function(&mut self) {
        self.function = self.function.flipped();
    }

    pub fn table(&self) -> TruthTable {
        TruthTable::build(self.function, self.bias)
    }

    /// Trains with the current field values.
    pub fn train(&mut self) -> Result<TrainingOutcome, InputError> {
        let (alpha, weights) = self.inputs.parse()?;
        let params = HyperParams::new(alpha, weights).with_max_updates(self.max_updates);
        params.validate()?;
        self.runs += 1;
        Ok(train_function(self.function, self.bias, &params, self.language))
    }

    fn status_line(&self) -> String {
        format!("{} · X0 = {:+} · α = {}", self.function.heading(), self.bias.value(), self.inputs.alpha)
    }
}

pub fn execute(function: Option<TargetFunction>, config: &PerceptConfig) -> Result<()> {
    let colors = PerceptColors::new();
    let mut session = Session::new(function.unwrap_or_else(|| config.function()), config);

    println!("{}", session.function.heading().bold().color(colors.primary()));
    println!("{}", TargetFunction::subtitle().color(colors.muted()));
    println!();

    loop {
        println!("{}", session.status_line().color(colors.muted()));
        let action = match Select::new("What next?", MenuAction::ALL.to_vec()).prompt() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match action {
            MenuAction::Train => match read_fields(&mut session) {
                Ok(()) => match session.train() {
                    Ok(outcome) => {
                        println!();
                        render::print_outcome(&outcome, true, &colors);
                        println!();
                    }
                    Err(e) => println!("{}", e.to_string().color(colors.warning())),
                },
                Err(InquireError::OperationCanceled) => {
                    println!("{}", "Training cancelled.".color(colors.muted()));
                }
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            },
            MenuAction::ShowTable => {
                println!("{}", render::truth_table_block(session.function, &session.table()));
            }
            MenuAction::SwitchBias => session.switch_bias(),
            MenuAction::SwitchFunction => session.switch_function(),
            MenuAction::Quit => break,
        }
    }

    tracing::debug!(runs = session.runs, "Interactive session ended");
    Ok(())
}

/// Prompts every field; nothing is stored unless all four are accepted.
fn read_fields(session: &mut Session) -> Result<(), InquireError> {
    let alpha = prompt_decimal("α (learning rate):", ALPHA_FIELD, &session.inputs.alpha)?;
    let mut weights = session.inputs.weights.clone();
    for (slot, field) in weights.iter_mut().zip(WEIGHT_FIELDS) {
        let accepted = prompt_decimal(&format!("{field}:"), field, slot.as_str())?;
        *slot = accepted;
    }
    session.inputs = RawInputs { alpha, weights };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use percept_training::WeightVector;

    #[test]
    fn test_session_starts_from_config_defaults() {
        let session = Session::new(TargetFunction::Or, &PerceptConfig::default());
        assert_eq!(session.function, TargetFunction::Or);
        assert_eq!(session.bias, Bipolar::Positive);
        assert_eq!(session.inputs.alpha, "0.1");
        assert_eq!(session.inputs.weights, ["0.0".to_string(), "0.0".to_string(), "0.0".to_string()]);
        assert_eq!(session.runs, 0);
    }

    #[test]
    fn test_switches_change_the_table() {
        let mut session = Session::new(TargetFunction::And, &PerceptConfig::default());
        session.switch_bias();
        session.switch_function();

        let table = session.table();
        assert_eq!(table, TruthTable::build(TargetFunction::Or, Bipolar::Negative));
    }

    #[test]
    fn test_train_uses_field_text() {
        let mut session = Session::new(TargetFunction::Or, &PerceptConfig::default());
        session.bias = Bipolar::Negative;
        session.inputs = RawInputs { alpha: "0,5".to_string(), weights: ["1".into(), "1".into(), "1".into()] };

        let outcome = session.train().unwrap();
        assert_eq!(outcome.update_count, 2);
        assert_eq!(outcome.final_weights, WeightVector::new(-1.0, 1.0, 1.0));
        assert_eq!(session.runs, 1);
    }

    #[test]
    fn test_invalid_field_blocks_training() {
        let mut session = Session::new(TargetFunction::And, &PerceptConfig::default());
        session.inputs.weights[0] = "zero".to_string();

        let err = session.train().unwrap_err();
        assert_eq!(err.to_string(), "The field 'w0' must be numeric.");
        assert_eq!(session.runs, 0);
    }

    #[test]
    fn test_zero_cap_from_config_blocks_training() {
        let mut config = PerceptConfig::default();
        config.training.max_updates = Some(0);
        let mut session = Session::new(TargetFunction::And, &config);

        let err = session.train().unwrap_err();
        assert!(matches!(err, InputError::Rejected(_)));
        assert_eq!(err.to_string(), "invalid training parameters: max_updates must be >= 1");
        assert_eq!(session.runs, 0);
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(MenuAction::Train.to_string(), "Train");
        assert_eq!(MenuAction::ALL.len(), 5);
    }
}
