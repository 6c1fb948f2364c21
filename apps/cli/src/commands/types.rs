//! Command type definitions shared between main.rs and the command modules.

use clap::{Args, Subcommand, ValueEnum};
use percept_training::{Bipolar, TargetFunction, TraceLanguage};
use std::path::PathBuf;

/// Which truth table(s) to train on.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionChoice {
    And,
    Or,
    /// AND, then OR, with the same inputs
    Both,
}

impl FunctionChoice {
    pub fn functions(self) -> &'static [TargetFunction] {
        match self {
            Self::And => &[TargetFunction::And],
            Self::Or => &[TargetFunction::Or],
            Self::Both => &TargetFunction::ALL,
        }
    }
}

impl From<TargetFunction> for FunctionChoice {
    fn from(function: TargetFunction) -> Self {
        match function {
            TargetFunction::And => Self::And,
            TargetFunction::Or => Self::Or,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TrainArgs {
    /// Function to learn (defaults to the configured one, else AND)
    #[arg(short, long, value_enum)]
    pub function: Option<FunctionChoice>,

    /// Bias input X0: 1 or -1
    #[arg(short, long, allow_negative_numbers = true)]
    pub bias: Option<Bipolar>,

    /// Learning rate α (a comma decimal separator is accepted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub alpha: Option<String>,

    /// Initial bias weight
    #[arg(long, allow_hyphen_values = true)]
    pub w0: Option<String>,

    /// Initial weight of X1
    #[arg(long, allow_hyphen_values = true)]
    pub w1: Option<String>,

    /// Initial weight of X2
    #[arg(long, allow_hyphen_values = true)]
    pub w2: Option<String>,

    /// Stop after this many weight updates
    #[arg(short, long)]
    pub max_updates: Option<u64>,

    /// Trace language (en, es)
    #[arg(long)]
    pub language: Option<TraceLanguage>,

    /// Output the outcome as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the summary, not the trace
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Function whose table is shown
    #[arg(short, long)]
    pub function: Option<TargetFunction>,

    /// Bias input X0: 1 or -1
    #[arg(short, long, allow_negative_numbers = true)]
    pub bias: Option<Bipolar>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a configuration file populated with the built-in defaults
    Init {
        /// Target file (defaults to ~/.percept/config.toml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
