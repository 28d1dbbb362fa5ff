//! File system path validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::ValidationResult;

// Optional `C:\` drive prefix, then no <>:"/\|?* characters
static PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^([a-zA-Z]:\\)?[^<>:"/\\|?*]+$"#).unwrap());

/// Validate a path name's syntax (existence is not checked)
///
/// Separators are rejected after the optional drive prefix, so this fits
/// single directory or file names such as `C:\backups` or `reports 2024`.
pub fn validate_path(value: Option<&str>, title: &str) -> ValidationResult {
    let path = match value {
        Some(v) if !v.is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if !PATH_REGEX.is_match(path) {
        return ValidationResult::failure(format!("{} is not valid", title));
    }

    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        for path in [r"C:\backups", "reports 2024", "d:\\data.old", "build-output"] {
            assert!(validate_path(Some(path), "Source Dir").is_ok(), "{} should pass", path);
        }
    }

    #[test]
    fn test_invalid_paths() {
        for path in [r"C:\a\b", "/var/log", "what?", "a|b", "C:relative", r#"quote""#, r"C:\"] {
            let status = validate_path(Some(path), "Source Dir");
            assert_eq!(status.message, "Source Dir is not valid", "{} should fail", path);
        }
    }

    #[test]
    fn test_path_required() {
        assert_eq!(validate_path(Some(""), "Source Dir").message, "Please enter Source Dir");
    }
}
