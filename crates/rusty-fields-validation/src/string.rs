//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::ValidationResult;
use crate::is_blank;

// Letters, digits, whitespace and . - , ( )
static PLAIN_TEXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\s.\- ,()]+$").unwrap());

/// Inclusive character-count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

impl Length {
    /// Short text such as names and titles
    pub const STRING: Length = Length::new(2, 100);
    /// Free text such as descriptions
    pub const LONG_STRING: Length = Length::new(2, 5000);
    pub const USERNAME: Length = Length::new(5, 20);
    pub const PASSWORD: Length = Length::new(8, 32);

    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::STRING
    }
}

/// Check the character count of a non-empty value, `None` when in range
///
/// `unit` is the noun used in the message ("character" or "characters").
pub(crate) fn check_length(
    value: &str,
    title: &str,
    length: Length,
    unit: &str,
) -> Option<ValidationResult> {
    let count = value.chars().count();
    if count < length.min {
        return Some(ValidationResult::failure(format!(
            "{} should be minimum {} {} long",
            title, length.min, unit
        )));
    }
    if count > length.max {
        return Some(ValidationResult::failure(format!(
            "{} should be maximum {} {} long",
            title, length.max, unit
        )));
    }
    None
}

/// Short plain text: required, bounded, letters/digits/whitespace and `. - , ( )`
///
/// # Examples
/// ```
/// use rusty_fields_validation::{validate_string, Length};
/// assert!(validate_string(Some("Acme Corp (EU)"), "Company", Length::STRING).is_ok());
/// assert!(validate_string(Some("Acme & Sons"), "Company", Length::STRING).is_err());
/// ```
pub fn validate_string(value: Option<&str>, title: &str, length: Length) -> ValidationResult {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if let Some(failed) = check_length(value, title, length, "character") {
        return failed;
    }

    if !PLAIN_TEXT_REGEX.is_match(value) {
        return ValidationResult::failure(format!("{} should be alphanumeric", title));
    }

    ValidationResult::success()
}

/// Free text: bounded length, any characters
pub fn validate_long_string(
    value: Option<&str>,
    title: &str,
    length: Length,
    optional: bool,
) -> ValidationResult {
    if optional && is_blank(value) {
        return ValidationResult::success();
    }

    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    check_length(value, title, length, "character").unwrap_or_else(ValidationResult::success)
}
