//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::{validate_all, ValidationResult};

/// `local@label.label.tld`, tld of 2 to 4 word characters
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$").unwrap());

const EMAIL_MIN_LENGTH: usize = 6;
const EMAIL_MAX_LENGTH: usize = 200;

/// Validate the format of one email address
///
/// `post_text` is appended to every failure message; list validation uses it
/// to name the offending address. The format check is a simple pattern, not
/// RFC 5322 parsing.
///
/// The too-short message says "minimum 3 characters" while 6 is enforced.
/// Existing callers match on that text, so it stays as is.
///
/// The pattern is anchored at the very end of the input: a trailing newline
/// (`"jane@example.com\n"`) is rejected, unlike .NET where `$` also matches
/// before a final `\n`.
///
/// # Examples
/// ```
/// use rusty_fields_validation::validate_email;
/// assert!(validate_email(Some("user.name@sub.example.com"), "Email", "").is_ok());
/// assert!(validate_email(Some("a@b.c"), "Email", "").is_err());
/// ```
pub fn validate_email(value: Option<&str>, title: &str, post_text: &str) -> ValidationResult {
    let email = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}. {}", title, post_text)),
    };

    let length = email.chars().count();
    if length < EMAIL_MIN_LENGTH {
        return ValidationResult::failure(format!(
            "{} should be minimum 3 characters long. {}",
            title, post_text
        ));
    }

    if length > EMAIL_MAX_LENGTH {
        return ValidationResult::failure(format!(
            " {} should be maximum {} characters long. {}",
            title, EMAIL_MAX_LENGTH, post_text
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return ValidationResult::failure(format!("Please enter valid {}. {}", title, post_text));
    }

    ValidationResult::success()
}

/// Validate every address in a list, reporting the first bad one
///
/// Each failure message ends with the address in parentheses and the result
/// carries its position in `error_index`.
pub fn validate_email_list<S: AsRef<str>>(emails: &[S], title: &str) -> ValidationResult {
    validate_all(emails.iter().map(|email| {
        let email = email.as_ref();
        validate_email(Some(email), title, &format!("({})", email))
    }))
}
