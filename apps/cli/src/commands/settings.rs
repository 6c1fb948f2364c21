//! Configuration command implementation.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::colors::PerceptColors;
use crate::commands::types::ConfigCommand;
use crate::config::PerceptConfig;

pub fn execute(command: ConfigCommand, config: &PerceptConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => show(config),
        ConfigCommand::Init { path, force } => {
            let path = path.unwrap_or_else(PerceptConfig::default_global_path);
            init(&path, force)
        }
    }
}

fn show(config: &PerceptConfig) -> Result<()> {
    let mut effective = PerceptConfig::with_builtin_defaults();
    effective.merge(config);
    print!("{}", effective.to_toml()?);
    Ok(())
}

fn init(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists: {} (use --force to overwrite)", path.display());
    }

    PerceptConfig::with_builtin_defaults()
        .save_to_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let colors = PerceptColors::new();
    println!("{} {}", "Wrote".color(colors.success()), path.display().to_string().color(colors.muted()));
    Ok(())
}
