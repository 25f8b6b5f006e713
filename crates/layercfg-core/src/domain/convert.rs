//! Best-effort string → value conversions shared by the accessors, the
//! command-line overlay and the settings dispatcher.
//!
//! These helpers never fail loudly.  They reproduce the lenient conversions a
//! configuration file has always been read with:
//!
//! | helper          | input           | output                                  |
//! |-----------------|-----------------|-----------------------------------------|
//! | [`leading_int`]    | `" 42px"`    | `42` (no digits → `0`)                  |
//! | [`leading_double`] | `"1.5e2x"`   | `150.0` (no number → `0.0`)             |
//! | [`str_to_bool`]    | `"yes"`      | `Some(true)` (unknown → `None`)         |
//! | [`split_list`]     | `"a, b"`     | `["a", "b"]`                            |
//! | [`expand_path`]    | `"~/x"`      | `"$HOME/x"`                             |
//! | [`parse_time`]     | `"10s"`      | 10 seconds                              |
//!
//! Duration and geometry parsing sit behind the [`ValueParsers`] trait so the
//! dispatcher can be exercised with a mock.

use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use super::geometry::Geometry;

/// Separator used by list values.
pub const LIST_DELIMITER: char = ',';

/// Parses the leading decimal integer of `s`, C `atoi` style.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit.  Input without digits yields `0`.  Out-of-range values saturate.
pub fn leading_int(s: &str) -> i32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        acc = acc.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        acc = -acc;
    }
    acc.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parses the leading floating point number of `s`, C `atof` style.
///
/// Accepts whitespace, a sign, digits, one decimal point and an exponent that
/// is followed by at least one digit.  Input without a number yields `0.0`.
pub fn leading_double(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when digits follow it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Classifies a boolean by its first character.
///
/// `y`, `Y`, `t`, `T`, `1` → `Some(true)`; `n`, `N`, `f`, `F`, `0` →
/// `Some(false)`; anything else (including an empty string) → `None`.
pub fn str_to_bool(value: &str) -> Option<bool> {
    match value.chars().next()? {
        'y' | 'Y' | 't' | 'T' | '1' => Some(true),
        'n' | 'N' | 'f' | 'F' | '0' => Some(false),
        _ => None,
    }
}

/// Splits a list value on [`LIST_DELIMITER`], trimming every element.
///
/// An empty string gives an empty list; empty elements between delimiters
/// are kept.
pub fn split_list(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value
        .split(LIST_DELIMITER)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_path(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}

/// Converts a time string to a [`Duration`].
///
/// The string is an integer with an optional unit: `ms`, `s`, `m`, `h` or
/// `d`, optionally separated from the number by whitespace.  A bare number is
/// seconds.  No digits, an unknown unit or a negative value all give zero and
/// log a warning.
pub fn parse_time(value: &str) -> Duration {
    let s = value.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'+' | b'-')));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        warn!("Time: '{value}': No digits found.");
        return Duration::ZERO;
    }

    let number_end = sign_len + digits_len;
    let amount: i64 = match s[..number_end].parse() {
        Ok(n) => n,
        Err(e) => {
            warn!("Time: '{value}': {e}.");
            return Duration::ZERO;
        }
    };
    if amount < 0 {
        warn!("Time: '{value}': negative durations are not supported.");
        return Duration::ZERO;
    }
    let amount = amount as u64;

    let unit = s[number_end..].trim_start();
    if unit.is_empty() || unit.starts_with('s') {
        return Duration::from_secs(amount);
    }
    if unit.starts_with("ms") {
        return Duration::from_millis(amount);
    }
    let seconds_per_unit = match unit.as_bytes()[0] {
        b'm' => 60,
        b'h' => 60 * 60,
        b'd' => 60 * 60 * 24,
        _ => {
            warn!("Time: '{value}': unknown unit.");
            return Duration::ZERO;
        }
    };
    Duration::from_secs(amount.saturating_mul(seconds_per_unit))
}

// ── External value collaborators ──────────────────────────────────────────────

/// Conversions the dispatcher delegates for [`Duration`] and [`Geometry`]
/// settings.
///
/// The production implementation is [`BuiltinParsers`]; tests substitute a
/// mock to check that the dispatcher hands the raw string over untouched.
#[cfg_attr(test, mockall::automock)]
pub trait ValueParsers {
    /// Converts a time string.  Never fails; invalid input becomes zero.
    fn parse_time(&self, raw: &str) -> Duration;

    /// Converts a geometry string, `None` when it cannot be understood.
    fn parse_geometry(&self, raw: &str) -> Option<Geometry>;
}

/// Default collaborators backed by [`parse_time`] and [`Geometry::parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinParsers;

impl ValueParsers for BuiltinParsers {
    fn parse_time(&self, raw: &str) -> Duration {
        parse_time(raw)
    }

    fn parse_geometry(&self, raw: &str) -> Option<Geometry> {
        Geometry::parse(raw)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_int_parses_prefix_and_defaults_to_zero() {
        assert_eq!(leading_int("1"), 1);
        assert_eq!(leading_int("  -12px"), -12);
        assert_eq!(leading_int("+7"), 7);
        assert_eq!(leading_int("abc"), 0);
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("99999999999"), i32::MAX);
    }

    #[test]
    fn test_leading_double_parses_prefix() {
        assert_eq!(leading_double("1.5"), 1.5);
        assert_eq!(leading_double(" -0.25rest"), -0.25);
        assert_eq!(leading_double("1.5e2x"), 150.0);
        // Exponent without digits is not part of the number.
        assert_eq!(leading_double("2e"), 2.0);
        assert_eq!(leading_double(".5"), 0.5);
        assert_eq!(leading_double("nope"), 0.0);
        assert_eq!(leading_double("-"), 0.0);
    }

    #[test]
    fn test_str_to_bool_inspects_first_character() {
        for yes in ["yes", "Y", "1", "true", "T"] {
            assert_eq!(str_to_bool(yes), Some(true), "{yes}");
        }
        for no in ["no", "F", "0", "false", "N"] {
            assert_eq!(str_to_bool(no), Some(false), "{no}");
        }
        assert_eq!(str_to_bool("maybe"), None);
        assert_eq!(str_to_bool(""), None);
    }

    #[test]
    fn test_split_list_trims_elements() {
        assert_eq!(split_list("open, close"), vec!["open", "close"]);
        assert_eq!(split_list(" a ,b,, c"), vec!["a", "b", "", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_expand_path_leaves_absolute_paths_alone() {
        assert_eq!(expand_path("/usr/bin/dmenu"), PathBuf::from("/usr/bin/dmenu"));
    }

    #[test]
    fn test_expand_path_replaces_tilde_with_home() {
        if let Some(home) = std::env::var_os("HOME") {
            let expected = PathBuf::from(format!("{}/notes", home.to_string_lossy()));
            assert_eq!(expand_path("~/notes"), expected);
        }
    }

    #[test]
    fn test_parse_time_units() {
        assert_eq!(parse_time("10"), Duration::from_secs(10));
        assert_eq!(parse_time("10s"), Duration::from_secs(10));
        assert_eq!(parse_time("250ms"), Duration::from_millis(250));
        assert_eq!(parse_time("2 m"), Duration::from_secs(120));
        assert_eq!(parse_time("1h"), Duration::from_secs(3600));
        assert_eq!(parse_time("1d"), Duration::from_secs(86_400));
    }

    #[test]
    fn test_parse_time_invalid_input_is_zero() {
        assert_eq!(parse_time("soon"), Duration::ZERO);
        assert_eq!(parse_time("5 weeks"), Duration::ZERO);
        assert_eq!(parse_time("-3"), Duration::ZERO);
    }
}
