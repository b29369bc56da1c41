//! Script mapper trait and traversal infrastructure
//!
//! This module provides the visitor infrastructure for the annotation passes. The
//! `ScriptMapper` trait defines what a pass does with one line or with the whole flat
//! stream, and `walk_script` drives the traversal over the token arena.
//!
//! # Design
//!
//! Passes mutate tokens in place. Per-line passes see the slice of the arena that belongs
//! to one source line; flat passes see the whole arena in script order. Both slices borrow
//! the same tokens, so whatever a line pass writes is what the next flat pass reads.
//!
//! # Examples
//!
//! ```ignore
//! struct TextCounter {
//!     count: usize,
//! }
//!
//! impl ScriptMapper for TextCounter {
//!     fn name(&self) -> &'static str {
//!         "text-counter"
//!     }
//!
//!     fn map_flat(&mut self, tokens: &mut [Token]) -> Result<(), AdvError> {
//!         self.count += tokens.iter().filter(|t| matches!(t, Token::TextRun(_))).count();
//!         Ok(())
//!     }
//! }
//! ```

use crate::adv::error::AdvError;
use crate::adv::script::{LineSpan, Script};
use crate::adv::token::Token;

/// Trait for annotation passes over a script.
///
/// Both methods default to doing nothing, so a pass only overrides the view it works on.
pub trait ScriptMapper {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Called once per source line, in order, with the line's tokens.
    fn map_line(&mut self, _line: &LineSpan, _tokens: &mut [Token]) -> Result<(), AdvError> {
        Ok(())
    }

    /// Called once with the whole token stream, after every line was visited.
    fn map_flat(&mut self, _tokens: &mut [Token]) -> Result<(), AdvError> {
        Ok(())
    }
}

/// Walk a script, applying a mapper.
///
/// Visits every line through `map_line`, then the flat stream through `map_flat`. The
/// first error aborts the walk.
pub fn walk_script(script: &mut Script, mapper: &mut impl ScriptMapper) -> Result<(), AdvError> {
    for index in 0..script.line_count() {
        let span = script.lines()[index].clone();
        let tokens = script.line_tokens_mut(index).ok_or_else(|| {
            AdvError::ContractViolation(format!(
                "line {} points outside the token arena",
                span.number
            ))
        })?;
        mapper.map_line(&span, tokens)?;
    }
    mapper.map_flat(script.tokens_mut())?;
    tracing::debug!(stage = mapper.name(), "stage complete");
    Ok(())
}
