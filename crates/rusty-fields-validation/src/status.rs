//! Validation result and first-failure aggregation

use serde::{Deserialize, Serialize};

/// Message carried by a passing check
pub const SUCCESS: &str = "Success";

/// Message carried when an optional field was left empty
pub const OPTIONAL: &str = "Optional";

/// Outcome of a single check, or of an aggregated batch
///
/// Results start out failed (`Default`) until a check marks them as passing.
/// `error_index` only means something after [`validate_all`]: `-1` for an
/// all-pass batch, otherwise the position of the first failing check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub error: bool,
    pub message: String,
    pub error_index: i32,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            error: true,
            message: "Initial Error".to_string(),
            error_index: 0,
        }
    }
}

impl ValidationResult {
    /// Passing result with the standard "Success" message
    pub fn success() -> Self {
        Self::passed(SUCCESS)
    }

    /// Passing result for an empty optional field
    pub fn optional() -> Self {
        Self::passed(OPTIONAL)
    }

    /// Passing result with a custom message
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
            error_index: 0,
        }
    }

    /// Failing result
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            error_index: 0,
        }
    }

    pub fn is_ok(&self) -> bool {
        !self.error
    }

    pub fn is_err(&self) -> bool {
        self.error
    }

    /// Position of the first failure after aggregation, if any
    pub fn failed_at(&self) -> Option<usize> {
        if self.error {
            usize::try_from(self.error_index).ok()
        } else {
            None
        }
    }

    /// Bridge to `Result`, the message becoming the error
    pub fn into_result(self) -> Result<(), String> {
        if self.error {
            Err(self.message)
        } else {
            Ok(())
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(message) => Self::failure(message),
        }
    }
}

/// Combine ordered check results, first failure wins
///
/// The first failing result is returned with its message and `error_index`
/// set to its position. When everything passes the result is
/// `{ error: false, message: "Success", error_index: -1 }`.
pub fn validate_all<I>(results: I) -> ValidationResult
where
    I: IntoIterator<Item = ValidationResult>,
{
    results
        .into_iter()
        .enumerate()
        .find(|(_, result)| result.error)
        .map(|(index, result)| {
            tracing::trace!(index, message = %result.message, "First failing check");
            ValidationResult {
                error: true,
                message: result.message,
                error_index: i32::try_from(index).unwrap_or(i32::MAX),
            }
        })
        .unwrap_or_else(|| ValidationResult {
            error: false,
            message: SUCCESS.to_string(),
            error_index: -1,
        })
}

/// Field name for an aggregated `error_index`
///
/// `names` is the caller's list of field names, aligned with the checks passed
/// to [`validate_all`]. `-1` or an out-of-range index gives an empty name.
pub fn reference_name<S: AsRef<str>>(names: &[S], error_index: i32) -> &str {
    usize::try_from(error_index)
        .ok()
        .and_then(|index| names.get(index))
        .map_or("", |name| name.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_error() {
        let status = ValidationResult::default();
        assert!(status.error);
        assert_eq!(status.message, "Initial Error");
        assert_eq!(status.error_index, 0);
    }

    #[test]
    fn test_all_pass() {
        let status = validate_all(vec![ValidationResult::success(), ValidationResult::optional()]);
        assert!(!status.error);
        assert_eq!(status.message, "Success");
        assert_eq!(status.error_index, -1);
        assert_eq!(status.failed_at(), None);
    }

    #[test]
    fn test_empty_batch_passes() {
        let status = validate_all(Vec::<ValidationResult>::new());
        assert!(status.is_ok());
        assert_eq!(status.error_index, -1);
    }

    #[test]
    fn test_first_failure_wins() {
        let status = validate_all(vec![
            ValidationResult::success(),
            ValidationResult::failure("second broke"),
            ValidationResult::failure("third broke"),
        ]);
        assert!(status.error);
        assert_eq!(status.message, "second broke");
        assert_eq!(status.error_index, 1);
        assert_eq!(status.failed_at(), Some(1));
    }

    #[test]
    fn test_reference_name() {
        let names = vec!["name".to_string(), "email".to_string()];
        assert_eq!(reference_name(&names, 1), "email");
        assert_eq!(reference_name(&names, -1), "");
        assert_eq!(reference_name(&names, 2), "");
        assert_eq!(reference_name(&["only"], -7), "");
    }

    #[test]
    fn test_result_bridge() {
        assert_eq!(ValidationResult::from(Ok::<(), String>(())), ValidationResult::success());
        let failed = ValidationResult::from(Err("nope".to_string()));
        assert!(failed.error);
        assert_eq!(failed.into_result(), Err("nope".to_string()));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&ValidationResult::failure("x")).unwrap();
        assert_eq!(json, r#"{"error":true,"message":"x","errorIndex":0}"#);
    }
}
