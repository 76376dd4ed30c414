//! Title macro parser.
//!
//! Parses strings like "!1 Pay rent !before 01.01.2030" into a cleaned
//! title plus structured priority and deadline fields.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::parse_macro_date;
use crate::error::TaskDraftError;
use crate::task::{Priority, MIN_TITLE_LEN};

/// Result of parsing a raw task title.
///
/// Lives only for the duration of one assembly call; it is never
/// stored. `priority` and `deadline` are present only when the matching
/// macro was recognized, and the matched substrings are removed from
/// `cleaned_title`. Macro-like text that is not recognized (an
/// out-of-range priority digit, say) stays in the title verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// The title with recognized macros removed and the result trimmed.
    pub cleaned_title: String,
    /// Priority extracted from a `!1`..`!4` token.
    pub priority: Option<Priority>,
    /// Deadline extracted from a `!before <date>` token.
    pub deadline: Option<NaiveDate>,
}

// Compiled macro patterns
static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!([1-4])").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static DEADLINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // "!before <date>" with loose digit groups; the captured token is
    // strictly validated afterwards.
    Regex::new(r"!before\s+(\d{2,4}[.-]\d{1,2}[.-]\d{2,4})")
        .unwrap_or_else(|e| panic!("Invalid deadline regex: {e}"))
});

/// Parse macros out of a raw task title.
///
/// Reads the current date once and delegates to [`parse_title_at`].
///
/// # Examples
///
/// ```
/// use taskdraft::{parse_title, Priority};
///
/// let parsed = parse_title("!1 Pay rent !before 01.01.2099").unwrap();
/// assert_eq!(parsed.cleaned_title, "Pay rent");
/// assert_eq!(parsed.priority, Some(Priority::Critical));
/// ```
///
/// # Errors
///
/// See [`parse_title_at`].
pub fn parse_title(raw_title: &str) -> Result<ParsedTitle, TaskDraftError> {
    parse_title_at(raw_title, Local::now().date_naive())
}

/// Parse macros out of a raw task title against a fixed `today`.
///
/// The priority token is extracted first so that the deadline pattern
/// runs on the priority-stripped title; a priority token sitting
/// between `!before` and its date would otherwise break the date match.
///
/// # Errors
///
/// - [`TaskDraftError::MalformedMacro`] when `!before` is present but
///   no date token follows it.
/// - [`TaskDraftError::InvalidDateFormat`] when the date token is not a
///   valid dd.MM.yyyy (or dd-MM-yyyy) calendar date.
/// - [`TaskDraftError::PastDeadline`] when the deadline lies strictly
///   before `today`.
/// - [`TaskDraftError::TitleTooShort`] when removing the deadline macro
///   leaves fewer than 4 characters of title.
pub fn parse_title_at(raw_title: &str, today: NaiveDate) -> Result<ParsedTitle, TaskDraftError> {
    let mut title = raw_title.to_string();
    let mut priority = None;

    if let Some(caps) = PRIORITY_PATTERN.captures(&title) {
        priority = caps
            .get(1)
            .and_then(|digit| digit.as_str().parse::<u8>().ok())
            .and_then(Priority::from_digit);
        title = PRIORITY_PATTERN.replace(&title, "").trim().to_string();
    }

    if title.contains("!before") && !DEADLINE_PATTERN.is_match(&title) {
        return Err(TaskDraftError::MalformedMacro);
    }

    let mut deadline = None;
    if let Some(caps) = DEADLINE_PATTERN.captures(&title) {
        let token = caps.get(1).map_or("", |m| m.as_str());
        let date = parse_macro_date(token)?;
        if date < today {
            return Err(TaskDraftError::PastDeadline(
                date.format("%d.%m.%Y").to_string(),
            ));
        }
        deadline = Some(date);
        title = DEADLINE_PATTERN.replace(&title, "").trim().to_string();

        let remaining = title.chars().count();
        if remaining < MIN_TITLE_LEN {
            return Err(TaskDraftError::TitleTooShort(remaining));
        }
    }

    Ok(ParsedTitle {
        cleaned_title: title,
        priority,
        deadline,
    })
}
