//! Digit filtering and display grouping

/// Removes every character that is not an ASCII digit
///
/// ```
/// use rusty_fields_phone::strip_non_digits;
/// assert_eq!(strip_non_digits("+1 (202) 555-0199"), "12025550199");
/// assert_eq!(strip_non_digits("call me"), "");
/// ```
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Groups a digit string for display
///
/// Digits are split into space separated groups of three, with the last group
/// holding up to four digits (`2025550199` becomes `202 555 0199`). Any
/// non-digit input is filtered first, so `strip_non_digits(format_digits(d))`
/// always gives back `d` for a digit string.
pub fn format_digits(digits: &str) -> String {
    let digits = strip_non_digits(digits);
    let len = digits.len();
    if len <= 4 {
        return digits;
    }

    // Leave a trailing group of four when the remainder would otherwise be a lone digit
    let tail = if len % 3 == 1 { 4 } else { len % 3 };
    let tail = if tail == 0 { 3 } else { tail };
    let head = &digits[..len - tail];

    let mut groups: Vec<&str> = head
        .as_bytes()
        .chunks(3)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect();
    groups.push(&digits[len - tail..]);
    groups.join(" ")
}
