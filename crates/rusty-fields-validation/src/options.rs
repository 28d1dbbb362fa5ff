//! Option selection validation functions

use crate::status::{validate_all, ValidationResult};

/// Single choice from an optional allow-list
///
/// `post_text` is appended to failure messages.
pub fn validate_option(
    value: Option<&str>,
    title: &str,
    allowed: Option<&[&str]>,
    post_text: &str,
    optional: bool,
) -> ValidationResult {
    let option = match value {
        Some(v) if !v.is_empty() => v,
        _ if optional => return ValidationResult::optional(),
        _ => return ValidationResult::failure(format!("Please select {}. {}", title, post_text)),
    };

    if allowed.is_some_and(|allowed| !allowed.contains(&option)) {
        return ValidationResult::failure(format!("{} is not valid. {}", title, post_text));
    }

    ValidationResult::success()
}

/// Integer choice; `None` and `0` both mean nothing was selected
pub fn validate_int_option(
    value: Option<i64>,
    title: &str,
    allowed: Option<&[i64]>,
    post_text: &str,
    optional: bool,
) -> ValidationResult {
    let option = match value {
        Some(v) if v != 0 => v,
        _ if optional => return ValidationResult::optional(),
        _ => return ValidationResult::failure(format!("Please select {}. {}", title, post_text)),
    };

    if allowed.is_some_and(|allowed| !allowed.contains(&option)) {
        return ValidationResult::failure(format!("{} is not valid. {}", title, post_text));
    }

    ValidationResult::success()
}

/// Every selected value must be in `allowed`; the first bad one is reported
/// with its position and value
pub fn validate_option_list<S: AsRef<str>>(
    values: &[S],
    allowed: &[&str],
    title: &str,
) -> ValidationResult {
    validate_all(values.iter().map(|value| {
        let value = value.as_ref();
        validate_option(Some(value), title, Some(allowed), &format!("({})", value), false)
    }))
}
