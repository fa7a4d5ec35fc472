//! Data size and date helpers for carrier packages.

use std::num::ParseFloatError;

use chrono::{NaiveDateTime, ParseError};

const GB_SUFFIX: &'static str = "GB";
const MB_SUFFIX: &'static str = "MB";
const VALIDITY_RAW_FORMAT: &'static str = "%Y%m%d%H%M%S";
const VALIDITY_FORMAT: &'static str = "%d %B %Y";

/// Converts a data size like `12.5GB` or `500MB` into megabytes.
///
/// Missing or empty values and unknown units are `0`. A known unit with a non-numeric amount is an
/// error.
pub fn to_mb(value: Option<&str>) -> Result<f64, ParseFloatError> {
    let value = match value {
        None | Some("") => return Ok(0.0),
        Some(value) => value.to_uppercase(),
    };
    if let Some(amount) = value.strip_suffix(GB_SUFFIX) {
        return Ok(amount.trim().parse::<f64>()? * 1024.0);
    } else if let Some(amount) = value.strip_suffix(MB_SUFFIX) {
        return amount.trim().parse::<f64>();
    }
    Ok(0.0)
}

/// The remaining percentage of a package, rounded to 2 decimal places with ties to even (`3.125` is
/// `3.12`). `0` when the allocated size is not positive.
pub fn usage_percent(
    allocated: Option<&str>,
    remaining: Option<&str>,
) -> Result<f64, ParseFloatError> {
    let total = to_mb(allocated)?;
    let remain = to_mb(remaining)?;
    if total <= 0.0 {
        return Ok(0.0);
    }
    format!("{:.2}", remain / total * 100.0).parse::<f64>()
}

/// Formats `YYYYMMDDhhmmss` as `DD MonthName YYYY`.
pub fn validity_date(raw: &str) -> Result<String, ParseError> {
    let time = NaiveDateTime::parse_from_str(raw, VALIDITY_RAW_FORMAT)?;
    Ok(time.format(VALIDITY_FORMAT).to_string())
}
