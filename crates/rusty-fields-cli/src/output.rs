// File: src/output.rs
// Purpose: Human and JSON rendering of validation results

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Serialize;

use rusty_fields_validation::ValidationResult;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// One-line summary of a result
pub fn render_result(result: &ValidationResult) -> String {
    if result.error {
        format!("{} {}", "✗".red(), result.message)
    } else if result.message.is_empty() {
        format!("{} {}", "✓".green(), "Valid".green())
    } else {
        format!("{} {}", "✓".green(), result.message.green())
    }
}

/// Print a result in the selected mode, returning whether it passed
pub fn print_result(result: &ValidationResult, json: bool) -> Result<bool> {
    if json {
        print_json(result)?;
    } else {
        println!("{}", render_result(result));
    }
    Ok(result.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_message() {
        colored::control::set_override(false);
        assert_eq!(render_result(&ValidationResult::failure("Email is not valid")), "✗ Email is not valid");
        assert_eq!(render_result(&ValidationResult::success()), "✓ Success");
        assert_eq!(render_result(&ValidationResult::passed("")), "✓ Valid");
    }
}
