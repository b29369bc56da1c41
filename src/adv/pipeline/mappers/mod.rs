//! ScriptMapper implementations for the annotation passes
//!
//! This module contains the concrete passes run by the
//! [executor](crate::adv::pipeline::executor), one per file.

pub mod last_click_wait;
pub mod leading_whitespace;
pub mod stamp_waits;
pub mod trailing_counts;

pub use last_click_wait::{mark_last_click_wait_on_line, LastClickWaitMapper};
pub use leading_whitespace::{redistribute_leading_whitespace, LeadingWhitespaceMapper};
pub use stamp_waits::{stamp_wait_markers, StampWaitMarkersMapper};
pub use trailing_counts::{accumulate_trailing_counts, TrailingCountMapper};
