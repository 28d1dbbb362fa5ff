//! IP address validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::status::ValidationResult;

static IPV4_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());

/// Validate dotted-quad IPv4 format
///
/// Only the shape is checked; `999.1.1.1` passes.
pub fn validate_ip(value: Option<&str>, title: &str) -> ValidationResult {
    let ip = match value {
        Some(v) if !v.is_empty() => v,
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    if !IPV4_REGEX.is_match(ip) {
        return ValidationResult::failure(format!("{} is not valid", title));
    }

    ValidationResult::success()
}

/// Validate a list of addresses; the first bad one is named in the message
pub fn validate_ip_list<S: AsRef<str>>(ips: &[S], title: &str) -> ValidationResult {
    if ips.is_empty() {
        return ValidationResult::failure(format!("Please enter {}", title));
    }

    ips.iter()
        .map(|ip| ip.as_ref())
        .find(|ip| validate_ip(Some(*ip), title).error)
        .map(|ip| ValidationResult::failure(format!("IP: {} is not valid", ip)))
        .unwrap_or_else(ValidationResult::success)
}
