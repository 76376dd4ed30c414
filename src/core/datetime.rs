//! Deadline date parsing.
//!
//! Two parsers live here: a strict one for dates embedded in the
//! `!before` title macro (dd.MM.yyyy only, after separator
//! normalization) and a flexible one for explicit deadline fields on
//! requests, which tries several layouts in order.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TaskDraftError;

/// Layouts accepted for explicit deadline fields, tried in order.
const SUPPORTED_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%d-%m-%Y"];

/// The only layout accepted inside the `!before` macro.
const MACRO_DATE_FORMAT: &str = "%d.%m.%Y";

// Exactly two digits, two digits, four digits. chrono alone also
// accepts unpadded day/month, which the macro format does not allow.
static STRICT_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$")
        .unwrap_or_else(|e| panic!("Invalid strict date regex: {e}"))
});

/// Parse a date token taken from the `!before` macro.
///
/// Separators may be `.` or `-`; they are normalized to `.` before the
/// token is matched against dd.MM.yyyy and parsed calendar-aware, so
/// `32.12.2026` and `2026-12-01` both fail.
///
/// # Errors
///
/// Returns [`TaskDraftError::InvalidDateFormat`] carrying the original
/// token when the shape or the calendar check fails.
pub fn parse_macro_date(token: &str) -> Result<NaiveDate, TaskDraftError> {
    let normalized = token.replace('-', ".");
    if !STRICT_DATE_PATTERN.is_match(&normalized) {
        return Err(TaskDraftError::InvalidDateFormat(token.to_string()));
    }
    NaiveDate::parse_from_str(&normalized, MACRO_DATE_FORMAT)
        .map_err(|_| TaskDraftError::InvalidDateFormat(token.to_string()))
}

/// Parse an explicit deadline string from a request.
///
/// Accepts ISO `yyyy-MM-dd`, `dd.MM.yyyy`, and `dd-MM-yyyy`; the first
/// layout that parses wins.
///
/// # Errors
///
/// Returns [`TaskDraftError::UnsupportedDateFormat`] carrying the raw
/// input when no layout matches.
pub fn parse_flexible_date(input: &str) -> Result<NaiveDate, TaskDraftError> {
    for format in SUPPORTED_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Ok(date);
        }
    }
    Err(TaskDraftError::UnsupportedDateFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== Macro Date Tests ====================

    #[test]
    fn test_macro_date_dots() {
        assert_eq!(parse_macro_date("01.01.2030"), Ok(date(2030, 1, 1)));
    }

    #[test]
    fn test_macro_date_dashes_normalize() {
        assert_eq!(parse_macro_date("01-01-2030"), Ok(date(2030, 1, 1)));
        assert_eq!(parse_macro_date("01-01-2030"), parse_macro_date("01.01.2030"));
    }

    #[test]
    fn test_macro_date_mixed_separators() {
        assert_eq!(parse_macro_date("15.06-2030"), Ok(date(2030, 6, 15)));
    }

    #[test]
    fn test_macro_date_day_out_of_range() {
        assert_eq!(
            parse_macro_date("32.12.2026"),
            Err(TaskDraftError::InvalidDateFormat("32.12.2026".to_string()))
        );
    }

    #[test]
    fn test_macro_date_month_out_of_range() {
        assert_eq!(
            parse_macro_date("01.13.2026"),
            Err(TaskDraftError::InvalidDateFormat("01.13.2026".to_string()))
        );
    }

    #[test]
    fn test_macro_date_rejects_iso_shape() {
        // Year-first tokens fit the loose macro shape but not dd.MM.yyyy.
        assert_eq!(
            parse_macro_date("2026-12-01"),
            Err(TaskDraftError::InvalidDateFormat("2026-12-01".to_string()))
        );
    }

    #[test]
    fn test_macro_date_rejects_unpadded_month() {
        assert_eq!(
            parse_macro_date("01.1.2026"),
            Err(TaskDraftError::InvalidDateFormat("01.1.2026".to_string()))
        );
    }

    #[test]
    fn test_macro_date_rejects_leap_day_off_year() {
        assert_eq!(
            parse_macro_date("29.02.2027"),
            Err(TaskDraftError::InvalidDateFormat("29.02.2027".to_string()))
        );
        assert_eq!(parse_macro_date("29.02.2028"), Ok(date(2028, 2, 29)));
    }

    // ==================== Flexible Date Tests ====================

    #[test]
    fn test_flexible_iso() {
        assert_eq!(parse_flexible_date("2030-01-01"), Ok(date(2030, 1, 1)));
    }

    #[test]
    fn test_flexible_dotted() {
        assert_eq!(parse_flexible_date("01.01.2030"), Ok(date(2030, 1, 1)));
    }

    #[test]
    fn test_flexible_dashed_day_first() {
        assert_eq!(parse_flexible_date("01-01-2030"), Ok(date(2030, 1, 1)));
    }

    #[test]
    fn test_flexible_layouts_agree() {
        let expected = Ok(date(2030, 6, 15));
        assert_eq!(parse_flexible_date("2030-06-15"), expected);
        assert_eq!(parse_flexible_date("15.06.2030"), expected);
        assert_eq!(parse_flexible_date("15-06-2030"), expected);
    }

    #[test]
    fn test_flexible_rejects_slashes() {
        assert_eq!(
            parse_flexible_date("15/06/2030"),
            Err(TaskDraftError::UnsupportedDateFormat("15/06/2030".to_string()))
        );
    }

    #[test]
    fn test_flexible_rejects_words() {
        assert_eq!(
            parse_flexible_date("tomorrow"),
            Err(TaskDraftError::UnsupportedDateFormat("tomorrow".to_string()))
        );
    }

    #[test]
    fn test_flexible_rejects_impossible_dates() {
        assert_eq!(
            parse_flexible_date("2026-13-01"),
            Err(TaskDraftError::UnsupportedDateFormat("2026-13-01".to_string()))
        );
        assert_eq!(
            parse_flexible_date("32.12.2026"),
            Err(TaskDraftError::UnsupportedDateFormat("32.12.2026".to_string()))
        );
    }
}
