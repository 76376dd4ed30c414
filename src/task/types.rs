use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::Schedulable;

/// Minimum number of characters a title must keep after macro removal.
pub const MIN_TITLE_LEN: usize = 4;

/// Task priority, ordered by urgency: `Critical` sorts first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Highest urgency (`!1`).
    Critical,
    /// `!2`
    High,
    /// `!3`; also the default when nothing specifies a priority.
    #[default]
    Medium,
    /// `!4`
    Low,
}

impl Priority {
    /// Map a `!1`..`!4` macro digit to a priority.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::Critical),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// A fully-resolved task, ready to hand to storage.
///
/// The persistence layer assigns identifiers and timestamps; this type
/// carries only the fields the assembly rules decide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub priority: Priority,
}

impl Schedulable for TaskDraft {
    fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }
}

/// Fields of a parsed create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw deadline string; goes through the flexible date parser.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Fields of a parsed edit request.
///
/// Every field is optional; an absent field keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Raw deadline string; goes through the flexible date parser.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}
