//! Core abstractions for taskdraft.
//!
//! This module provides date parsing and shared traits used by the
//! title parser and the draft assembler.

mod datetime;
mod traits;

pub use datetime::{parse_flexible_date, parse_macro_date};
pub use traits::Schedulable;
