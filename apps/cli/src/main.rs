//! Percept CLI - front-end for the bipolar perceptron trainer
//!
//! Provides a `percept` command that trains a ±1 perceptron on the AND or OR
//! truth table and prints the step-by-step trace.

mod colors;
mod commands;
mod config;
mod render;
mod validation;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, shells};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{interactive, settings, table, train, ConfigCommand, TableArgs, TrainArgs};
use config::PerceptConfig;
use percept_training::TargetFunction;

/// Percept - bipolar perceptron trainer for AND and OR
///
/// Trains a single ±1 perceptron with the reset-by-error rule: every
/// misclassification updates the weights and restarts the scan from the
/// first example.
#[derive(Parser, Debug)]
#[command(
    name = "percept",
    author,
    version,
    about = "Percept - bipolar perceptron trainer for AND and OR",
    long_about = "Percept trains a bipolar (±1) perceptron on the AND or OR truth table.\nEvery training run prints a reproducible step-by-step trace of each decision and weight update."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Configuration file (overrides ~/.percept/config.toml and ./.perceptrc)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train on a truth table and print the trace
    ///
    /// Values not given on the command line come from the configuration
    /// file, then from the built-in defaults (α=0.1, weights 0, bias +1).
    Train(TrainArgs),

    /// Show the activation table of a function
    Table(TableArgs),

    /// Interactive session: edit α and the weights, train, repeat
    Interactive {
        /// Function to start with
        #[arg(short, long)]
        function: Option<TargetFunction>,
    },

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

fn parse_level(level: &str) -> Level {
    match level.to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() -> anyhow::Result<()> {
    // Handle completion generation
    if let Ok(shell) = std::env::var("PERCEPT_GENERATE_COMPLETIONS") {
        let mut cmd = Args::command();
        match shell.as_str() {
            "bash" => generate(shells::Bash, &mut cmd, "percept", &mut std::io::stdout()),
            "zsh" => generate(shells::Zsh, &mut cmd, "percept", &mut std::io::stdout()),
            "fish" => generate(shells::Fish, &mut cmd, "percept", &mut std::io::stdout()),
            "powershell" => generate(shells::PowerShell, &mut cmd, "percept", &mut std::io::stdout()),
            "elvish" => generate(shells::Elvish, &mut cmd, "percept", &mut std::io::stdout()),
            _ => anyhow::bail!("Unknown shell: {}. Supported: bash, zsh, fish, powershell, elvish", shell),
        }
        return Ok(());
    }

    let args = Args::parse();

    // Configuration is loaded before tracing so its log level can apply.
    let config = PerceptConfig::load(args.config.as_deref())?;

    let level = args.log_level.as_deref().or(config.log_level.as_deref()).map_or(Level::WARN, parse_level);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Some(Command::Train(train_args)) => train::execute(train_args, &config)?,
        Some(Command::Table(table_args)) => table::execute(&table_args, &config)?,
        Some(Command::Interactive { function }) => interactive::execute(function, &config)?,
        Some(Command::Config(command)) => settings::execute(command, &config)?,
        None => interactive::execute(None, &config)?,
    }

    Ok(())
}
