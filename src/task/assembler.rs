//! Draft assembly from create and edit requests.
//!
//! Merges explicit request fields, title macros, and (for edits) the
//! stored task into one draft. Explicit request values always win over
//! macro-derived ones, which in turn win over stored values.

use chrono::{Local, NaiveDate};

use crate::core::parse_flexible_date;
use crate::error::TaskDraftError;
use crate::parser::parse_title_at;
use crate::task::{CreateTaskRequest, EditTaskRequest, TaskDraft, MIN_TITLE_LEN};

/// Assemble a draft for a new task.
///
/// Reads the current date once and delegates to
/// [`assemble_for_create_at`].
///
/// # Errors
///
/// See [`assemble_for_create_at`].
pub fn assemble_for_create(request: &CreateTaskRequest) -> Result<TaskDraft, TaskDraftError> {
    assemble_for_create_at(request, Local::now().date_naive())
}

/// Assemble a draft for a new task against a fixed `today`.
///
/// The caller stamps timestamps and the initial status on the returned
/// draft before persisting it.
///
/// # Errors
///
/// - [`TaskDraftError::EmptyTitle`] when the title is blank; checked
///   before any macro parsing.
/// - Any parser error from the title macros.
/// - [`TaskDraftError::TitleTooShort`] when the macro-cleaned title has
///   fewer than 4 characters.
/// - [`TaskDraftError::UnsupportedDateFormat`] when an explicit
///   deadline string matches no accepted layout.
pub fn assemble_for_create_at(
    request: &CreateTaskRequest,
    today: NaiveDate,
) -> Result<TaskDraft, TaskDraftError> {
    if request.title.trim().is_empty() {
        return Err(TaskDraftError::EmptyTitle);
    }

    let parsed = parse_title_at(&request.title, today)?;

    // The parser enforces the minimum only on its deadline path; this
    // covers titles with no deadline macro.
    let length = parsed.cleaned_title.chars().count();
    if length < MIN_TITLE_LEN {
        return Err(TaskDraftError::TitleTooShort(length));
    }

    let deadline = match request.deadline.as_deref() {
        Some(raw) => Some(parse_flexible_date(raw)?),
        None => parsed.deadline,
    };

    Ok(TaskDraft {
        title: parsed.cleaned_title,
        description: request.description.clone(),
        deadline,
        priority: request.priority.or(parsed.priority).unwrap_or_default(),
    })
}

/// Assemble the updated draft for an edited task.
///
/// Reads the current date once and delegates to
/// [`assemble_for_edit_at`].
///
/// # Errors
///
/// See [`assemble_for_edit_at`].
pub fn assemble_for_edit(
    request: &EditTaskRequest,
    existing: &TaskDraft,
) -> Result<TaskDraft, TaskDraftError> {
    assemble_for_edit_at(request, existing, Local::now().date_naive())
}

/// Assemble the updated draft for an edited task against a fixed
/// `today`.
///
/// Absent request fields keep the stored values; in particular an
/// edited title without a deadline macro never clears a stored
/// deadline. The caller persists the result with a refreshed update
/// timestamp.
///
/// # Errors
///
/// - Any parser error from the request title's macros.
/// - [`TaskDraftError::UnsupportedDateFormat`] when an explicit
///   deadline string matches no accepted layout.
/// - [`TaskDraftError::PastDeadline`] when an explicit deadline lies
///   strictly before `today`.
pub fn assemble_for_edit_at(
    request: &EditTaskRequest,
    existing: &TaskDraft,
    today: NaiveDate,
) -> Result<TaskDraft, TaskDraftError> {
    let parsed = match request.title.as_deref() {
        Some(raw) => Some(parse_title_at(raw, today)?),
        None => None,
    };

    let title = match &parsed {
        Some(p) => p.cleaned_title.clone(),
        None => existing.title.clone(),
    };

    let description = request
        .description
        .clone()
        .or_else(|| existing.description.clone());

    let priority = request
        .priority
        .or_else(|| parsed.as_ref().and_then(|p| p.priority))
        .unwrap_or(existing.priority);

    let deadline = match request.deadline.as_deref() {
        Some(raw) => {
            let date = parse_flexible_date(raw)?;
            if date < today {
                return Err(TaskDraftError::PastDeadline(raw.to_string()));
            }
            Some(date)
        }
        // A macro deadline already passed the parser's past check;
        // absent both, the stored deadline is kept as is.
        None => parsed.as_ref().and_then(|p| p.deadline).or(existing.deadline),
    };

    Ok(TaskDraft {
        title,
        description,
        deadline,
        priority,
    })
}
