//! Truth table command implementation.

use anyhow::Result;
use percept_training::TruthTable;

use crate::commands::types::TableArgs;
use crate::config::PerceptConfig;
use crate::render;

pub fn execute(args: &TableArgs, config: &PerceptConfig) -> Result<()> {
    let function = args.function.unwrap_or_else(|| config.function());
    let bias = args.bias.unwrap_or_else(|| config.bias());

    let table = TruthTable::build(function, bias);
    println!("{}", render::truth_table_block(function, &table));
    Ok(())
}
