//! Error types for taskdraft.

use thiserror::Error;

/// Errors raised while parsing title macros or assembling a task draft.
///
/// Every failure aborts the current assembly call; no partial draft is
/// ever returned. The consuming layer is expected to map these onto
/// user-facing responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskDraftError {
    /// A create request arrived with an empty or all-whitespace title.
    #[error("Title can't be empty!")]
    EmptyTitle,

    /// The title is shorter than the minimum after macro removal.
    #[error("Title must be at least 4 characters long, got {0}")]
    TitleTooShort(usize),

    /// `!before` is present but no date token follows it.
    #[error("Deadline macro is malformed or missing a date. Use dd.MM.yyyy or dd-MM-yyyy")]
    MalformedMacro,

    /// The deadline macro's date token is not a valid dd.MM.yyyy date.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// An explicit deadline string matched none of the accepted layouts.
    #[error("Unsupported date format: {0}")]
    UnsupportedDateFormat(String),

    /// The resolved deadline lies strictly before the current date.
    #[error("Deadline can't be in the past: {0}")]
    PastDeadline(String),
}
