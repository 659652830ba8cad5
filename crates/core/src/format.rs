//! Display formatting for currency amounts and dates.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::CoreError;
use crate::types::Amount;

/// Digit-group separator for currency amounts.
pub const THOUSANDS_SEPARATOR: char = '.';

/// Display pattern for dates (`DD-MM-YYYY`).
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Placeholder shown in tables when a value is missing or unparseable.
pub const EMPTY_CELL: &str = "-";

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// Group an amount's digits in thousands: `1234567` → `1.234.567`.
///
/// No currency symbol is added; see [`format_rupiah`].
pub fn format_currency(amount: Amount) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Like [`format_currency`] for fractional input; the fraction is truncated.
pub fn format_currency_f64(amount: f64) -> String {
    if !amount.is_finite() {
        return format_currency(0);
    }
    format_currency(amount.trunc() as Amount)
}

/// `Rp 1.234.567`.
pub fn format_rupiah(amount: Amount) -> String {
    format!("Rp {}", format_currency(amount))
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

enum ParsedDate {
    /// A calendar date or a wall-clock time with no zone attached.
    Calendar(NaiveDate),
    /// An instant that must be moved into the viewer's zone first.
    Instant(DateTime<chrono::FixedOffset>),
}

fn parse_iso(value: &str) -> Result<ParsedDate, CoreError> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(ParsedDate::Instant(instant));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(ParsedDate::Calendar(date));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(ParsedDate::Calendar(naive.date()));
        }
    }
    Err(CoreError::InvalidDate(value.to_string()))
}

/// Parse an ISO date or timestamp into a calendar date, keeping the date
/// as written (no zone conversion). Used for ordering checks.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoreError> {
    match parse_iso(value)? {
        ParsedDate::Calendar(date) => Ok(date),
        ParsedDate::Instant(instant) => Ok(instant.date_naive()),
    }
}

/// Render an ISO date or timestamp as `DD-MM-YYYY` in `tz`.
///
/// Date-only values are rendered as-is; instants are converted to `tz`
/// first. Returns `None` for unparseable input.
pub fn format_display_date_in<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<String> {
    let date = match parse_iso(value).ok()? {
        ParsedDate::Calendar(date) => date,
        ParsedDate::Instant(instant) => instant.with_timezone(tz).date_naive(),
    };
    Some(date.format(DISPLAY_DATE_FORMAT).to_string())
}

/// Render an ISO date or timestamp as `DD-MM-YYYY` in the local calendar.
pub fn format_display_date(value: &str) -> Option<String> {
    format_display_date_in(value, &Local)
}

/// Table-cell variant of [`format_display_date`].
pub fn display_date_or_dash(value: Option<&str>) -> String {
    value
        .and_then(format_display_date)
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// `05-03-2024 s/d 10-03-2024`, or a single date when the end is missing.
pub fn format_period(start: Option<&str>, end: Option<&str>) -> String {
    let start = display_date_or_dash(start);
    match end.and_then(format_display_date) {
        Some(end) => format!("{start} s/d {end}"),
        None => start,
    }
}
