//! URL validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::is_missing;
use crate::status::ValidationResult;

// http(s) + localhost[:port] or dotted host + optional path/query
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(http|https)://(localhost(:\d+)?|([\w-]+\.)+[\w-]+)(/[\w\- ./?%&=]*)?$")
        .unwrap()
});

/// Validate an http/https URL's format
///
/// Accepts `localhost` with an optional port or a dotted host name, followed
/// by an optional path and query. Matching ignores case. Reachability is not
/// checked.
///
/// # Examples
/// ```
/// use rusty_fields_validation::validate_url;
/// assert!(validate_url(Some("https://example.com/logo.png"), "Logo URL", false).is_ok());
/// assert!(validate_url(Some("http://localhost:8080/api"), "API URL", false).is_ok());
/// assert!(validate_url(Some("ftp://example.com"), "Logo URL", false).is_err());
/// ```
pub fn validate_url(value: Option<&str>, title: &str, optional: bool) -> ValidationResult {
    if optional && is_missing(value) {
        return ValidationResult::optional();
    }

    let url = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if !URL_REGEX.is_match(url) {
        return ValidationResult::failure(format!("{} is not valid", title));
    }

    ValidationResult::success()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        for url in [
            "https://example.com",
            "http://sub.example.co.uk/path/to/page",
            "HTTPS://EXAMPLE.COM/Upper",
            "http://localhost",
            "http://localhost:3000/api?x=1&y=2",
            "https://example.com/search?q=a%20b",
        ] {
            assert!(validate_url(Some(url), "URL", false).is_ok(), "{} should pass", url);
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "example.com",
            "ftp://example.com",
            "https://",
            "http://nodomain",
            "https://example.com/#fragment",
            "http://localhost:port",
        ] {
            let status = validate_url(Some(url), "URL", false);
            assert_eq!(status.message, "URL is not valid", "{} should fail", url);
        }
    }

    #[test]
    fn test_optional_url() {
        let status = validate_url(None, "URL", true);
        assert!(status.is_ok());
        assert_eq!(status.message, "Optional");
        assert_eq!(validate_url(Some(" "), "URL", false).message, "Please enter URL");
    }
}
