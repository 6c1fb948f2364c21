//! Interactive numeric prompting.

use inquire::validator::Validation;
use inquire::error::InquireResult;
use inquire::Text;

use super::numeric::parse_decimal;

/// Prompts for a decimal value, re-prompting until the text parses.
///
/// Returns the raw text the user accepted so it can be offered again as
/// the next default.
pub fn prompt_decimal(label: &str, field: &'static str, default: &str) -> InquireResult<String> {
    Text::new(label)
        .with_default(default)
        .with_help_message("A comma is accepted as the decimal separator")
        .with_validator(move |input: &str| {
            Ok(match parse_decimal(field, input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()
}
