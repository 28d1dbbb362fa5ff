//! Longest-prefix phone number parsing

use serde::Serialize;

use crate::country::{CountryCode, CountryTable};
use crate::digits::{format_digits, strip_non_digits};

/// Shortest national number accepted after the country code
///
/// Guards against a short local number matching a country code by accident.
pub const MIN_NATIONAL_DIGITS: usize = 6;

/// A number split into calling code and national part (digits only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub country_code: String,
    pub national_number: String,
}

impl PhoneNumber {
    /// Display form, e.g. `+1 202 555 0199`
    pub fn formatted(&self) -> String {
        format!("+{} {}", self.country_code, format_digits(&self.national_number))
    }

    /// All digits again, calling code first
    pub fn digits(&self) -> String {
        format!("{}{}", self.country_code, self.national_number)
    }
}

/// Splits raw phone input using an injected country table
#[derive(Debug, Clone, Copy)]
pub struct PhoneParser<'a> {
    table: &'a CountryTable,
    min_national_digits: usize,
}

impl<'a> PhoneParser<'a> {
    pub fn new(table: &'a CountryTable) -> Self {
        Self {
            table,
            min_national_digits: MIN_NATIONAL_DIGITS,
        }
    }

    pub fn with_min_national_digits(mut self, min: usize) -> Self {
        self.min_national_digits = min;
        self
    }

    /// Parse arbitrary phone input ("+1 (202) 555-0199", "44 20 7946 0958", ...)
    ///
    /// Returns `None` when no calling code prefixes the digits, or when the
    /// longest matching code leaves a national number that is too short.
    /// A too-short remainder does not fall back to a shorter code.
    pub fn parse(&self, raw: &str) -> Option<PhoneNumber> {
        self.parse_with_country(raw).map(|(number, _)| number)
    }

    /// Like [`parse`](Self::parse), also returning the matched table entry
    pub fn parse_with_country(&self, raw: &str) -> Option<(PhoneNumber, &'a CountryCode)> {
        let digits = strip_non_digits(raw);
        if digits.is_empty() {
            return None;
        }

        let country = self.table.longest_prefix(&digits)?;
        let national = &digits[country.code_length()..];

        if national.len() < self.min_national_digits {
            tracing::debug!(
                code = %country.code,
                national_digits = national.len(),
                "National number too short after calling code"
            );
            return None;
        }

        let number = PhoneNumber {
            country_code: country.code.clone(),
            national_number: national.to_string(),
        };
        tracing::debug!(code = %number.country_code, country = %country.name_code, "Parsed phone number");
        Some((number, country))
    }
}
