//! Rusty-Fields Phone
//!
//! Country calling-code table and phone number parsing.
//!
//! The table is loaded once (bundled dataset or an external JSON file) and then
//! handed by reference to [`PhoneParser`], which matches the longest known
//! country code at the start of a number and splits off the national part.
//!
//! ```
//! use rusty_fields_phone::{CountryTable, PhoneParser};
//!
//! let table = CountryTable::bundled();
//! let parsed = PhoneParser::new(&table).parse("+1 (202) 555-0199").unwrap();
//! assert_eq!(parsed.country_code, "1");
//! assert_eq!(parsed.national_number, "2025550199");
//! ```

pub mod country;
pub mod digits;
pub mod error;
pub mod parser;

pub use country::{CountryCode, CountryTable};
pub use digits::{format_digits, strip_non_digits};
pub use error::CountryTableError;
pub use parser::{PhoneNumber, PhoneParser, MIN_NATIONAL_DIGITS};
