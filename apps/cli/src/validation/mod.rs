//! Input validation for the values a user types in.

pub mod numeric;
pub mod prompt;

// Re-export types for convenience
pub use numeric::{InputError, RawInputs};
pub use prompt::prompt_decimal;
