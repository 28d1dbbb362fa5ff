//! Username and password validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::ValidationResult;
use crate::string::{check_length, Length};

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9.\-@]+$").unwrap());

/// Username with the default 5..20 length bounds
///
/// # Examples
/// ```
/// use rusty_fields_validation::validate_username;
/// assert!(validate_username(Some("abc-123"), "Username").is_ok());
/// assert!(validate_username(Some("1abcde"), "Username").is_err());
/// assert!(validate_username(Some("abcde-"), "Username").is_err());
/// ```
pub fn validate_username(value: Option<&str>, title: &str) -> ValidationResult {
    validate_username_with(value, title, Length::USERNAME)
}

/// Username: alphanumerics plus `. - @`, starts with a letter, ends with a
/// letter or digit
pub fn validate_username_with(value: Option<&str>, title: &str, length: Length) -> ValidationResult {
    let username = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if let Some(failed) = check_length(username, title, length, "characters") {
        return failed;
    }

    if !USERNAME_REGEX.is_match(username) {
        return ValidationResult::failure(format!(
            "{} should be alphanumeric or Dot(.), Hyphen(-), At the rate(@)",
            title
        ));
    }

    // The pattern above guarantees ASCII from here on
    if !username.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return ValidationResult::failure(format!("{} should start with a letter", title));
    }

    if !username.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        return ValidationResult::failure(format!("{} should end with a letter or number", title));
    }

    ValidationResult::success()
}

/// Password: 8..32 characters with lowercase, uppercase, digit and a symbol
///
/// Each class is checked directly since the regex crate has no look-around.
/// A symbol is anything that is not an ASCII letter or digit; newlines are
/// not allowed anywhere.
pub fn validate_password(value: Option<&str>, title: &str) -> ValidationResult {
    let password = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if let Some(failed) = check_length(password, title, Length::PASSWORD, "characters") {
        return failed;
    }

    let checks = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        !password.contains('\n'),
    ];

    if checks.iter().all(|passed| *passed) {
        ValidationResult::success()
    } else {
        ValidationResult::failure(format!(
            "{} should contain at least one uppercase letter, one lowercase letter, one digit and one special character",
            title
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username(Some("abc-123"), "Username").is_ok());
        assert!(validate_username(Some("john.doe@corp"), "Username").is_ok());

        assert_eq!(
            validate_username(Some("1abcde"), "Username").message,
            "Username should start with a letter"
        );
        assert_eq!(
            validate_username(Some("abcde-"), "Username").message,
            "Username should end with a letter or number"
        );
        assert_eq!(
            validate_username(Some("abc_def"), "Username").message,
            "Username should be alphanumeric or Dot(.), Hyphen(-), At the rate(@)"
        );
    }

    #[test]
    fn test_username_length() {
        assert_eq!(
            validate_username(Some("abcd"), "Username").message,
            "Username should be minimum 5 characters long"
        );
        assert_eq!(
            validate_username(Some(&"a".repeat(21)), "Username").message,
            "Username should be maximum 20 characters long"
        );
        assert!(validate_username_with(Some("abc"), "Handle", Length::new(3, 8)).is_ok());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password(Some("Abcdef1!"), "Password").is_ok());
        assert!(validate_password(Some("Pässwörd1"), "Password").is_ok());

        let complexity = "Password should contain at least one uppercase letter, one lowercase letter, one digit and one special character";
        assert_eq!(validate_password(Some("alllowercase1!"), "Password").message, complexity);
        assert_eq!(validate_password(Some("ALLUPPERCASE1!"), "Password").message, complexity);
        assert_eq!(validate_password(Some("NoDigits!!"), "Password").message, complexity);
        assert_eq!(validate_password(Some("NoSymbol123"), "Password").message, complexity);
        assert_eq!(validate_password(Some("Line\nBreak1!"), "Password").message, complexity);
    }

    #[test]
    fn test_password_length() {
        assert_eq!(validate_password(Some(""), "Password").message, "Please enter Password");
        assert_eq!(
            validate_password(Some("Ab1!"), "Password").message,
            "Password should be minimum 8 characters long"
        );
        let long = format!("Ab1!{}", "x".repeat(29));
        assert_eq!(
            validate_password(Some(&long), "Password").message,
            "Password should be maximum 32 characters long"
        );
    }
}
