//! # Validation Module
//!
//! Pure input validation for operator-typed text.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompts (apps/console)                               │
//! │  ├── owns stdin and the re-prompt loop                                 │
//! │  └── loops until a function below returns Ok                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── string → typed value, or a typed ValidationError                  │
//! │  └── no loops, no printing, no I/O                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: BoxOffice workflows                                          │
//! │  └── business checks (age gate, quota, payment sufficiency)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed input is recoverable by definition: the console re-prompts
//! indefinitely, so nothing in this module ever reaches a workflow.

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_AGE, MIN_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a required free-text field (names, filenames).
///
/// Returns the trimmed value.
///
/// ## Example
/// ```rust
/// use boxoffice_core::validation::non_empty;
///
/// assert_eq!(non_empty("name", "  Ana ").unwrap(), "Ana");
/// assert!(non_empty("name", "   ").is_err());
/// ```
pub fn non_empty(field: &'static str, input: &str) -> ValidationResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Parses an integer and checks it against an inclusive range.
///
/// Used for menu choices and category/method picks.
pub fn int_in_range(
    field: &'static str,
    input: &str,
    min: i64,
    max: i64,
) -> ValidationResult<i64> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;
    if value < min || value > max {
        return Err(ValidationError::OutOfRange { field, min, max });
    }
    Ok(value)
}

/// Parses a buyer or operator age (1-120 inclusive).
///
/// Note the distinction: an age of 12 is VALID input (the buyer exists),
/// it just fails the business age gate later. Only out-of-range or
/// non-numeric text is a validation error.
pub fn age(input: &str) -> ValidationResult<u8> {
    let value = int_in_range("age", input, MIN_AGE as i64, MAX_AGE as i64)?;
    Ok(value as u8)
}

/// Parses a tendered amount; must be strictly positive.
pub fn positive_amount(field: &'static str, input: &str) -> ValidationResult<Money> {
    let amount: Money = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAmount { field })?;
    if !amount.is_positive() {
        return Err(ValidationError::InvalidAmount { field });
    }
    Ok(amount)
}

/// Interprets a yes/no answer. `None` means "ask again".
pub fn yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("name", "Ana").unwrap(), "Ana");
        assert_eq!(non_empty("name", "  Ana Maria  ").unwrap(), "Ana Maria");
        assert!(non_empty("name", "").is_err());
        assert!(non_empty("name", " \t ").is_err());
    }

    #[test]
    fn test_int_in_range() {
        assert_eq!(int_in_range("option", "3", 1, 8).unwrap(), 3);
        assert_eq!(int_in_range("option", " 8 ", 1, 8).unwrap(), 8);
        assert!(int_in_range("option", "0", 1, 8).is_err());
        assert!(int_in_range("option", "9", 1, 8).is_err());
        assert!(int_in_range("option", "two", 1, 8).is_err());
        assert!(int_in_range("option", "", 1, 8).is_err());
    }

    #[test]
    fn test_age_boundaries() {
        assert_eq!(age("1").unwrap(), 1);
        assert_eq!(age("120").unwrap(), 120);
        assert!(age("0").is_err());
        assert!(age("121").is_err());
        assert!(age("-5").is_err());
        assert!(age("old").is_err());
    }

    #[test]
    fn test_underage_is_valid_input() {
        // 12 parses fine; the business gate rejects it later
        assert_eq!(age("12").unwrap(), 12);
    }

    #[test]
    fn test_positive_amount() {
        assert_eq!(
            positive_amount("amount", "5000.50").unwrap(),
            Money::from_minor(500_050)
        );
        assert!(positive_amount("amount", "0").is_err());
        assert!(positive_amount("amount", "-10").is_err());
        assert!(positive_amount("amount", "lots").is_err());
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no("y"), Some(true));
        assert_eq!(yes_no(" YES "), Some(true));
        assert_eq!(yes_no("N"), Some(false));
        assert_eq!(yes_no("no"), Some(false));
        assert_eq!(yes_no("maybe"), None);
        assert_eq!(yes_no(""), None);
    }
}
