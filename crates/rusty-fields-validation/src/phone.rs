//! Phone number validation
//!
//! Wraps [`PhoneParser`] with the usual required/optional handling. The
//! country table is passed in so it is loaded once by the caller.

use rusty_fields_phone::{CountryTable, PhoneParser};

use crate::is_blank;
use crate::status::ValidationResult;

/// Validate a phone number against a country table
///
/// # Examples
/// ```
/// use rusty_fields_validation::validate_phone;
/// use rusty_fields_validation::phone_numbers::CountryTable;
///
/// let countries = CountryTable::bundled();
/// assert!(validate_phone(Some("+1 (202) 555-0199"), "Phone", false, &countries).is_ok());
/// assert!(validate_phone(Some("555-0199"), "Phone", false, &countries).is_err());
/// ```
pub fn validate_phone(
    value: Option<&str>,
    title: &str,
    optional: bool,
    countries: &CountryTable,
) -> ValidationResult {
    validate_phone_with(value, title, optional, &PhoneParser::new(countries))
}

/// Validate with a preconfigured parser (custom national-number floor)
pub fn validate_phone_with(
    value: Option<&str>,
    title: &str,
    optional: bool,
    parser: &PhoneParser<'_>,
) -> ValidationResult {
    let raw = match value {
        Some(v) if !is_blank(Some(v)) => v,
        _ if optional => return ValidationResult::optional(),
        _ => return ValidationResult::failure(format!("Please enter {}", title)),
    };

    match parser.parse(raw) {
        Some(number) if !number.country_code.is_empty() && !number.national_number.is_empty() => {
            ValidationResult::success()
        }
        _ => ValidationResult::failure(format!("{} is not valid", title)),
    }
}
