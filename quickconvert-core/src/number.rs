//! Number parsing and display formatting
//!
//! All arithmetic is plain `f64`. This module only deals with the text on
//! either side of a conversion: turning user input into a finite number and
//! turning a result into a display string.

use thiserror::Error;

/// Significant figures used when nothing else is configured
pub const DEFAULT_SIG_FIGS: usize = 6;

/// Upper bound on significant figures; `f64` carries no more than 17
pub const MAX_SIG_FIGS: usize = 17;

/// Results smaller than this (but non-zero) always use scientific notation
const SMALL_VALUE_THRESHOLD: f64 = 1e-6;

/// Error type for number parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Number is not finite: {0}")]
    NotFinite(String),
}

/// Parse user input into a finite number.
///
/// Accepts decimal and scientific literals ("42", "-3.5", "1.5e3") with
/// surrounding whitespace. Rejects empty input, NaN and infinities.
pub fn parse_number(text: &str) -> Result<f64, NumberError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(NumberError::Empty);
    }

    let value: f64 = s
        .parse()
        .map_err(|_| NumberError::ParseError(s.to_string()))?;

    if !value.is_finite() {
        return Err(NumberError::NotFinite(s.to_string()));
    }
    Ok(value)
}

/// Format a conversion result for display.
///
/// Non-zero values below 1e-6 in magnitude are shown in scientific notation
/// with `sig_figs` fractional digits. Everything else uses general
/// formatting: `sig_figs` significant digits, fixed notation for decimal
/// exponents in `-4..sig_figs`, scientific otherwise, trailing zeros removed.
/// Exponents carry a sign and at least two digits (`1.5e+06`, `1e-07`).
pub fn format_value(value: f64, sig_figs: usize) -> String {
    let sig_figs = sig_figs.clamp(1, MAX_SIG_FIGS);

    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < SMALL_VALUE_THRESHOLD {
        let sci = format!("{:.*e}", sig_figs, value);
        let (mantissa, exponent) = split_exponent(&sci);
        return with_exponent(mantissa, exponent);
    }

    // Round to the requested significant figures first; the exponent of
    // the rounded value decides between fixed and scientific layout.
    let sci = format!("{:.*e}", sig_figs - 1, value);
    let (mantissa, exponent) = split_exponent(&sci);

    if exponent < -4 || exponent >= sig_figs as i32 {
        with_exponent(&strip_trailing_zeros(mantissa), exponent)
    } else {
        let decimals = (sig_figs as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}

/// Split Rust's `{:e}` output ("1.5e-7") into mantissa and exponent
fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn with_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

fn strip_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Ok(42.0));
        assert_eq!(parse_number("  -3.5 "), Ok(-3.5));
        assert_eq!(parse_number("1.5e3"), Ok(1500.0));
    }

    #[test]
    fn test_parse_number_rejects_bad_input() {
        assert_eq!(parse_number("   "), Err(NumberError::Empty));
        assert_eq!(parse_number("abc"), Err(NumberError::ParseError("abc".into())));
        assert!(matches!(parse_number("inf"), Err(NumberError::NotFinite(_))));
        assert!(matches!(parse_number("NaN"), Err(NumberError::NotFinite(_))));
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_value(212.0, 6), "212");
        assert_eq!(format_value(3.7, 6), "3.7");
        assert_eq!(format_value(-40.0, 6), "-40");
        assert_eq!(format_value(0.0001, 6), "0.0001");
        assert_eq!(format_value(3.28083989501, 6), "3.28084");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_value(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_value(8796093022208.0, 6), "8.79609e+12");
        assert_eq!(format_value(0.00001, 6), "1e-05");
        assert_eq!(format_value(999999.7, 6), "1e+06");
        assert_eq!(format_value(1.5e300, 6), "1.5e+300");
    }

    #[test]
    fn test_format_small_values() {
        assert_eq!(format_value(1e-7, 6), "1.000000e-07");
        assert_eq!(format_value(-2.5e-9, 3), "-2.500e-09");
        assert_eq!(format_value(3e-120, 2), "3.00e-120");
    }

    #[test]
    fn test_format_zero_and_clamping() {
        assert_eq!(format_value(0.0, 6), "0");
        assert_eq!(format_value(-0.0, 6), "0");
        assert_eq!(format_value(2.7, 0), "3");
        assert_eq!(format_value(f64::INFINITY, 6), "inf");
    }
}
