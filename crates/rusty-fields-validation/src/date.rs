//! Date format validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::ValidationResult;

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Validate `YYYY-MM-DD` syntax
///
/// Calendar correctness is not checked: `2023-02-30` passes. The value must
/// end right after the day; `"2024-01-01\n"` is rejected, whereas a .NET `$`
/// would accept it.
pub fn validate_date(value: Option<&str>, title: &str) -> ValidationResult {
    let date = match value {
        Some(v) if !v.is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if !DATE_REGEX.is_match(date) {
        return ValidationResult::failure(format!("Please enter valid {}", title));
    }

    ValidationResult::success()
}
