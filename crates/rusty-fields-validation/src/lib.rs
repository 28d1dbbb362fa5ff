//! Rusty-Fields-Validation
//!
//! Stateless field format checks. Every validator takes the value, a
//! human-readable field title used in the message, and optional constraints,
//! and returns a [`ValidationResult`]. Invalid input is a normal result with
//! `error == true`, never a Rust error.
//!
//! Results from several checks combine with [`validate_all`], which reports
//! the first failure and its position:
//!
//! ```
//! use rusty_fields_validation::*;
//!
//! let names = ["name", "email", "password"];
//! let status = validate_all([
//!     validate_string(Some("Jane Doe"), "Name", Length::STRING),
//!     validate_email(Some("jane@"), "Email", ""),
//!     validate_password(Some("Abcdef1!"), "Password"),
//! ]);
//!
//! assert!(status.error);
//! assert_eq!(status.error_index, 1);
//! assert_eq!(reference_name(&names, status.error_index), "email");
//! ```

pub mod boolean;
pub mod date;
pub mod domain;
pub mod email;
pub mod file;
pub mod git;
pub mod ip;
pub mod numeric;
pub mod options;
pub mod path;
pub mod phone;
pub mod status;
pub mod string;
pub mod url;
pub mod user;

// Re-export all validators
pub use boolean::*;
pub use date::*;
pub use domain::*;
pub use email::*;
pub use file::*;
pub use git::*;
pub use ip::*;
pub use numeric::*;
pub use options::*;
pub use path::*;
pub use phone::*;
pub use status::*;
pub use string::*;
pub use url::*;
pub use user::*;

pub use rusty_fields_phone as phone_numbers;

/// Trimmed-empty check shared by the "Please enter" branches
pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Zero-length check (whitespace counts as content)
pub(crate) fn is_missing(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
