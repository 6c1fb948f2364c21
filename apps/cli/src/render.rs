//! Human-readable rendering of tables and training results.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, CellAlignment, Table};
use percept_training::{TargetFunction, Termination, TrainingOutcome, TruthTable};

use crate::colors::PerceptColors;

/// Summary labels shown under the trace.
pub fn summary_lines(outcome: &TrainingOutcome) -> [String; 2] {
    [format!("Iterations: {}", outcome.iterations), format!("Final weights: {}", outcome.final_weights)]
}

/// Heading, subtitle and truth table of `function`.
pub fn truth_table_block(function: TargetFunction, table: &TruthTable) -> String {
    let mut grid = Table::new();
    grid.load_preset(UTF8_FULL);
    grid.set_header(vec!["X0", "X1", "X2", "Yd"]);
    for row in table.iter() {
        grid.add_row(vec![
            row.bias.to_string(),
            row.x1.to_string(),
            row.x2.to_string(),
            row.desired.to_string(),
        ]);
    }
    for column in grid.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Center);
    }

    format!(
        "{}\n{}\n\n{}\n{}",
        function.heading(),
        TargetFunction::subtitle(),
        function.table_title(),
        grid
    )
}

pub fn print_outcome(outcome: &TrainingOutcome, show_trace: bool, colors: &PerceptColors) {
    if show_trace {
        print!("{}", outcome.trace);
        println!();
    }

    let [iterations, weights] = summary_lines(outcome);
    println!("{}  {}", iterations.bold(), weights.color(colors.primary()));
    println!("{}", format!("Weight updates applied: {}", outcome.update_count).color(colors.muted()));

    if outcome.termination == Termination::CapReached {
        println!(
            "{}",
            format!(
                "Warning: {} stopped at the update cap without an error-free pass; the data may not be linearly separable.",
                outcome.function_name
            )
            .color(colors.warning())
        );
    }
}
