// SPDX-License-Identifier: MPL-2.0
//! Three-step catalog forms.
//!
//! Every product family shares the same wizard shape:
//! 1. Basic information
//! 2. Features and benefits
//! 3. Fees and requirements
//!
//! Each step validates before advancing; validation failures surface as
//! i18n keys rendered inline. Numeric inputs are buffered as strings and
//! parsed on submission.

pub mod account_form;
pub mod card_form;
pub mod credit_form;
pub mod stepper;

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Create,
    Edit(String),
}

impl Mode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Mode::Edit(_))
    }
}

/// Parses a buffered numeric field.
///
/// Empty input means "not provided"; anything non-empty must parse.
pub(crate) fn parse_optional_f64(value: &str) -> Result<Option<f64>, ()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| ())
}

pub(crate) fn parse_f64_or_zero(value: &str) -> Result<f64, ()> {
    Ok(parse_optional_f64(value)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_numeric_field_is_none() {
        assert_eq!(parse_optional_f64("  "), Ok(None));
        assert_eq!(parse_f64_or_zero(""), Ok(0.0));
    }

    #[test]
    fn garbage_numeric_field_is_an_error() {
        assert!(parse_optional_f64("12abc").is_err());
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_optional_f64("12.5"), Ok(Some(12.5)));
    }
}
