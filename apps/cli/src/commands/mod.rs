//! Command implementations for the Percept CLI.

pub mod interactive;
pub mod settings;
pub mod table;
pub mod train;
pub mod types;

// Re-export types for convenience
pub use types::{ConfigCommand, TableArgs, TrainArgs};
