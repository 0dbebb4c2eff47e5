//! Display formatting helpers shared by the form renderer and toasts.
//!
//! The functions in this module are intentionally lightweight and free of
//! application state so they can be called from rendering code on every
//! frame and from other crates embedding the form.

use chrono::NaiveDate;

/// Text rendered when a date input cannot be parsed.
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// What: Format a monetary amount with exactly two digits after the decimal point.
///
/// Inputs:
/// - `value`: Free-form text as typed into the amount field; any leading
///   numeric prefix is used (optional sign, fraction, exponent) and trailing
///   garbage is ignored.
///
/// Output:
/// - The amount rendered as e.g. `"5.00"` or `"-3.10"`, or the platform's
///   not-a-number text (`"NaN"`) when no numeric prefix exists.
///
/// Details:
/// - No currency symbol, thousands separators, or locale handling; the raw
///   numeric rendering is what the billing views expect.
/// - Rounding is the standard formatter rounding (`"19.999"` -> `"20.00"`).
/// - Non-finite values pass through as the formatter renders them; they are
///   not treated as errors here.
#[must_use]
pub fn format_currency(value: &str) -> String {
    format!("{:.2}", parse_float_prefix(value))
}

/// What: Format a calendar date as "abbreviated month, numeric day, four-digit year".
///
/// Inputs:
/// - `input`: An ISO-8601 date (`2024-03-05`), an RFC 3339 date-time, or a
///   plain `YYYY-MM-DDTHH:MM:SS` timestamp; surrounding whitespace is ignored.
///
/// Output:
/// - A string like `"Mar 5, 2024"`, or [`INVALID_DATE_TEXT`] when the input
///   does not parse.
///
/// Details:
/// - Month names are the English abbreviations; the billing API emits ISO
///   dates, so no broader parsing is attempted.
/// - Unparseable input is rendered as the invalid-date text rather than
///   surfaced as an error.
#[must_use]
pub fn format_date(input: &str) -> String {
    parse_calendar_date(input).map_or_else(
        || INVALID_DATE_TEXT.to_string(),
        |d| d.format("%b %-d, %Y").to_string(),
    )
}

/// What: Parse the longest leading float out of free-form text.
///
/// Inputs:
/// - `input`: Arbitrary text; leading whitespace is skipped.
///
/// Output:
/// - The parsed value, or `f64::NAN` when the text has no numeric prefix.
///
/// Details:
/// - Accepts an optional sign, digits with at most one decimal point, and an
///   optional exponent; everything after the numeric prefix is ignored.
fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end += 1;
    }
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    // Optional exponent, only kept when it carries at least one digit.
    if seen_digit && matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&(b'+' | b'-'))) {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while matches!(bytes.get(exp_end), Some(b) if b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    if !seen_digit {
        return f64::NAN;
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// What: Parse a calendar date out of the accepted input grammars.
///
/// Inputs:
/// - `input`: Candidate date text.
///
/// Output:
/// - `Some(NaiveDate)` when one of the accepted formats matches, `None` otherwise.
///
/// Details:
/// - Tried in order: plain ISO date, RFC 3339 date-time, naive `T`-separated
///   timestamp. Time-of-day components are discarded.
fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    None
}
