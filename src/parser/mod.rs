//! Title macro parsing.
//!
//! Recognizes inline `!1`..`!4` priority tokens and `!before <date>`
//! deadline tokens in raw task titles.

mod title;

pub use title::{parse_title, parse_title_at, ParsedTitle};
