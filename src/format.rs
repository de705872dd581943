//! Pure, deterministic formatting helpers used by the render policy.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Formats a currency figure with thousands separators, keeping at most
/// three fractional digits and trimming trailing zeros.
pub fn format_currency(value: f64) -> String {
    group_number(&render_plain(value))
}

/// Formats a cash-flow figure with thousands separators and exactly two
/// decimal places.
pub fn format_cash_flow(value: f64) -> String {
    group_number(&format!("{value:.2}"))
}

/// Appends a literal `%`, without rounding beyond the stored value.
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

/// Pluralizes the hold-period unit: `1` is "1 year", anything else
/// (zero and negatives included) is "N years".
pub fn format_hold_period(years: i64) -> String {
    if years == 1 {
        "1 year".to_string()
    } else {
        format!("{years} years")
    }
}

/// Calendar date, e.g. "March 4, 2025".
pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y").to_string()
}

/// Calendar date with minute precision, e.g. "March 4, 2025 2:05 PM".
pub fn format_date_time(instant: &DateTime<Utc>) -> String {
    instant.format("%B %-d, %Y %-I:%M %p").to_string()
}

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|/v/|/u/\w+/|/embed/|\?v=|&v=)([^#&?]*)")
        .expect("youtube id pattern is valid")
});

/// Extracts the 11-character YouTube video id from a URL, covering the
/// `youtu.be/`, `/v/`, `/u/<user>/`, `/embed/`, `?v=` and `&v=` forms.
/// Unmatched URLs yield `None`, never an error.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let captures = YOUTUBE_ID.captures(url)?;
    let id = captures.get(1)?.as_str();
    (id.len() == 11).then_some(id)
}

/// Shortest decimal rendering with at most three fractional digits.
fn render_plain(value: f64) -> String {
    let mut rendered = format!("{value:.3}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    rendered
}

/// Inserts thousands separators into an already-rendered decimal number.
fn group_number(rendered: &str) -> String {
    let unsigned = rendered.strip_prefix('-');
    let negative = unsigned.is_some();
    let unsigned = unsigned.unwrap_or(rendered);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(rendered.len() + int_part.len() / 3);
    if negative {
        out.push('-');
    }
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
