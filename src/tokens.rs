//! Pattern tokens and their formatting rules
//!
//! Each recognized token maps to a rule over the snapshot and the active
//! locale. The scan is longest-match: the alternation is ordered so `YYYY`
//! wins over `YY`, `MM` over `M`, and so on. Characters the scan does not
//! match pass through verbatim, which is how literal separators work.

use crate::locale::LocaleDefinition;
use crate::snapshot::DateSnapshot;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Alternation over every recognized token, longest first. Built once.
    pub static ref TOKEN_RE: Regex =
        Regex::new("YYYY|YY|MMMM|MMM|MM|M|DDD|DD|D|dd|d|HH|H|hh|h|mm|m|ss|s|ff|f|A|a|ZZ|Z")
            .expect("token alternation is a valid pattern");
}

/// Substitution text for one matched token.
///
/// `D` is the min weekday name while `d` is the numeric day of the month;
/// the two are unrelated despite the shared letter.
pub fn resolve(token: &str, snapshot: &DateSnapshot, locale: &LocaleDefinition) -> String {
    match token {
        "YYYY" => snapshot.year.to_string(),
        "YY" => leading_zeroes(snapshot.year.rem_euclid(100) as u32, 2),
        "MMMM" => locale.months(snapshot),
        "MMM" => locale.months_short(snapshot),
        "MM" => leading_zeroes(snapshot.month, 2),
        "M" => snapshot.month.to_string(),
        "DDD" => locale.weekdays(snapshot),
        "DD" => locale.weekdays_short(snapshot),
        "D" => locale.weekdays_min(snapshot),
        "dd" => leading_zeroes(snapshot.day, 2),
        "d" => snapshot.day.to_string(),
        "HH" => leading_zeroes(snapshot.hour24, 2),
        "H" => snapshot.hour24.to_string(),
        "hh" => leading_zeroes(snapshot.hour12, 2),
        "h" => snapshot.hour12.to_string(),
        "mm" => leading_zeroes(snapshot.minute, 2),
        "m" => snapshot.minute.to_string(),
        "ss" => leading_zeroes(snapshot.second, 2),
        "s" => snapshot.second.to_string(),
        "ff" => leading_zeroes(snapshot.millisecond, 3),
        "f" => snapshot.millisecond.to_string(),
        "A" => meridiem(snapshot, false),
        "a" => meridiem(snapshot, true),
        "ZZ" => timezone(snapshot, ""),
        "Z" => timezone(snapshot, ":"),
        other => other.to_string(),
    }
}

/// Zero-pads `value` to `width` digits.
pub fn leading_zeroes(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

fn meridiem(snapshot: &DateSnapshot, lowercase: bool) -> String {
    let label = if snapshot.hour24 < 12 { "AM" } else { "PM" };
    if lowercase {
        label.to_lowercase()
    } else {
        label.to_string()
    }
}

/// `±HHMM` (empty separator) or `±HH:MM` from the snapshot's offset
/// minutes, sign and magnitude exactly as reported.
fn timezone(snapshot: &DateSnapshot, separator: &str) -> String {
    let minutes = snapshot.offset_minutes;
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.unsigned_abs();
    format!(
        "{}{}{}{}",
        sign,
        leading_zeroes(abs / 60, 2),
        separator,
        leading_zeroes(abs % 60, 2)
    )
}
