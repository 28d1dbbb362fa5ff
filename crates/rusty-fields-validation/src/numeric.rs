//! Numeric validation functions

use core::fmt::Display;

use crate::status::ValidationResult;

/// Optional inclusive bounds check shared by the numeric validators
fn check_bounds<T: PartialOrd + Display>(
    value: T,
    title: &str,
    min: Option<T>,
    max: Option<T>,
) -> ValidationResult {
    if let Some(min) = min {
        if value < min {
            return ValidationResult::failure(format!("{} should be minimum {}", title, min));
        }
    }

    if let Some(max) = max {
        if value > max {
            return ValidationResult::failure(format!("{} should be maximum {}", title, max));
        }
    }

    ValidationResult::success()
}

/// Floating point value: must be a number, then within the optional bounds
///
/// NaN is treated as a missing value.
pub fn validate_number(value: f64, title: &str, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    if value.is_nan() {
        return ValidationResult::failure(format!("Please enter {}", title));
    }

    check_bounds(value, title, min, max)
}

/// Integer value within the optional bounds
pub fn validate_int(value: i64, title: &str, min: Option<i64>, max: Option<i64>) -> ValidationResult {
    check_bounds(value, title, min, max)
}
