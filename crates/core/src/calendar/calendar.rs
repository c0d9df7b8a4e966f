use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{ColorTimeError, Result};

/// Mean Gregorian year, used for fractional year spans.
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Formats tried, in order, when no explicit format is given.
const DEFAULT_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%m/%d/%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a date string.
///
/// `now` and `today` resolve to the local date. With `format` (a chrono
/// strftime pattern) only that format is tried; otherwise ISO dates, RFC 3339
/// timestamps and common English forms such as `Aug 9, 2015` are accepted.
/// English ordinal suffixes are dropped first, so `Aug 9th, 2015` works too.
pub fn parse_date(input: &str, format: Option<&str>) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("now") || trimmed.eq_ignore_ascii_case("today") {
        return Ok(today());
    }

    let cleaned = strip_ordinal_suffixes(trimmed);

    if let Some(format) = format {
        return parse_with(&cleaned, format).ok_or_else(|| ColorTimeError::date_parse(input));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(&cleaned) {
        return Ok(datetime.date_naive());
    }

    DEFAULT_FORMATS
        .iter()
        .chain(DATETIME_FORMATS)
        .find_map(|format| parse_with(&cleaned, format))
        .ok_or_else(|| ColorTimeError::date_parse(input))
}

fn parse_with(input: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, format)
        .or_else(|_| NaiveDateTime::parse_from_str(input, format).map(|dt| dt.date()))
        .ok()
}

/// Drops `st`, `nd`, `rd` and `th` when they directly follow a digit.
fn strip_ordinal_suffixes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut prev_digit = false;

    while let Some(c) = chars.next() {
        if prev_digit && c.is_ascii_alphabetic() {
            let mut suffix = String::from(c);
            if let Some(&next) = chars.peek() {
                suffix.push(next);
            }
            let lowered = suffix.to_ascii_lowercase();
            let at_word_end = {
                let mut lookahead = chars.clone();
                lookahead.next();
                lookahead.peek().map_or(true, |n| !n.is_ascii_alphanumeric())
            };
            if matches!(lowered.as_str(), "st" | "nd" | "rd" | "th") && at_word_end {
                chars.next();
                prev_digit = false;
                continue;
            }
        }
        prev_digit = c.is_ascii_digit();
        out.push(c);
    }

    out
}

/// Zero-indexed day of the year: January 1st is 0, December 31st is 364 or 365.
pub fn day_of_year(date: NaiveDate) -> u16 {
    date.ordinal0() as u16
}

/// Fractional years from `from` to `to`; negative when `to` is earlier.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}
