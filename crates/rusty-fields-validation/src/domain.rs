//! Domain name validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::is_missing;
use crate::status::ValidationResult;

// Labels of 2..63 alphanumerics/hyphens, no hyphen at either edge, alphabetic tld
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9][a-zA-Z0-9\-]{0,61}[a-zA-Z0-9]\.)+[a-zA-Z]{2,}$").unwrap()
});

/// Validate a domain name's format (not whether it resolves)
///
/// A passing result carries `"<title> is Valid"` rather than `"Success"`.
pub fn validate_domain(value: Option<&str>, title: &str, optional: bool) -> ValidationResult {
    if optional && is_missing(value) {
        return ValidationResult::success();
    }

    let domain = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if !DOMAIN_REGEX.is_match(domain) {
        return ValidationResult::failure(format!("{} is not valid", title));
    }

    ValidationResult::passed(format!("{} is Valid", title))
}

/// Validate a list of domains, failing on the first bad entry
///
/// The failure message gets `": <domain>"` appended.
pub fn validate_domain_list<S: AsRef<str>>(
    domains: &[S],
    title: &str,
    optional: bool,
) -> ValidationResult {
    if domains.is_empty() {
        return if optional {
            ValidationResult::success()
        } else {
            ValidationResult::failure(format!("Please enter {}", title))
        };
    }

    for domain in domains {
        let domain = domain.as_ref();
        let mut status = validate_domain(Some(domain), title, false);
        if status.error {
            status.message = format!("{}: {}", status.message, domain);
            return status;
        }
    }

    ValidationResult::passed(format!("{} is Valid", title))
}
