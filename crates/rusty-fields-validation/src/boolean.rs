//! Equality and flag checks with caller-supplied messages

use crate::status::ValidationResult;

/// Fails when `value` is non-empty and differs from `expected`
///
/// Typical use: password confirmation, where an empty confirmation is left
/// to the required-field check.
pub fn validate_equal(value: Option<&str>, expected: Option<&str>, failed_message: &str) -> ValidationResult {
    match value {
        Some(v) if !v.is_empty() && Some(v) != expected => ValidationResult::failure(failed_message),
        _ => ValidationResult::success(),
    }
}

/// Fails when `value` is non-empty and equals `forbidden`
pub fn validate_not_equal(value: Option<&str>, forbidden: Option<&str>, failed_message: &str) -> ValidationResult {
    match value {
        Some(v) if !v.is_empty() && Some(v) == forbidden => ValidationResult::failure(failed_message),
        _ => ValidationResult::success(),
    }
}

/// Fails when `value` is false (terms accepted, consent given, ...)
pub fn validate_true(value: bool, failed_message: &str) -> ValidationResult {
    if value {
        ValidationResult::success()
    } else {
        ValidationResult::failure(failed_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal() {
        assert!(validate_equal(Some("secret"), Some("secret"), "mismatch").is_ok());
        assert!(validate_equal(Some(""), Some("secret"), "mismatch").is_ok());
        assert!(validate_equal(None, Some("secret"), "mismatch").is_ok());

        let status = validate_equal(Some("secret"), Some("Secret"), "Passwords do not match");
        assert!(status.error);
        assert_eq!(status.message, "Passwords do not match");
        assert!(validate_equal(Some("secret"), None, "mismatch").is_err());
    }

    #[test]
    fn test_not_equal() {
        assert!(validate_not_equal(Some("new"), Some("old"), "same").is_ok());
        assert!(validate_not_equal(Some(""), Some(""), "same").is_ok());
        assert_eq!(
            validate_not_equal(Some("old"), Some("old"), "New password must differ").message,
            "New password must differ"
        );
    }

    #[test]
    fn test_true() {
        assert!(validate_true(true, "Accept the terms").is_ok());
        assert_eq!(validate_true(false, "Accept the terms").message, "Accept the terms");
    }
}
