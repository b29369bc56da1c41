//! Annotation pipeline
//!
//! This module provides:
//! - The traversal infrastructure (`ScriptMapper`, `walk_script`)
//! - The annotation passes (`mappers`)
//! - The executor running them in their fixed order (`PipelineExecutor`, `annotate`)
//! - The line-level newline predicate (`line_has_trailing_newline`)

pub mod classify;
pub mod executor;
pub mod mapper;
pub mod mappers;

pub use classify::line_has_trailing_newline;
pub use executor::{annotate, PipelineExecutor};
pub use mapper::{walk_script, ScriptMapper};

// Re-export the passes
pub use mappers::{
    accumulate_trailing_counts, mark_last_click_wait_on_line, redistribute_leading_whitespace,
    stamp_wait_markers, LastClickWaitMapper, LeadingWhitespaceMapper, StampWaitMarkersMapper,
    TrailingCountMapper,
};
