//! Leading whitespace redistribution mapper
//!
//! Text runs sometimes start with spaces (`^   then line two^`). When the engine breaks the
//! page before such a run, the spaces misalign it against the previous line:
//!
//!     This is line one
//!        then line two
//!
//! This pass moves those spaces off the text run and onto the click-wait in front of it, so
//! the engine decides at render time whether to emit them. Page-waits keep nothing: text
//! right after a cleared page never wants leading spaces.
//!
//! The same walk rewrites every text run's raw form to carry the control marker right after
//! its opening delimiter.
//!
//! Precondition: trailing counts are already accumulated. The rewrite changes the text
//! those counts were measured on.

use crate::adv::error::AdvError;
use crate::adv::pipeline::mapper::ScriptMapper;
use crate::adv::token::Token;

/// Walk the script backwards, moving each text run's leading whitespace onto the closest
/// preceding click-wait and marking the run as displayable text.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn redistribute_leading_whitespace(tokens: &mut [Token]) {
    let mut pending = String::new();
    let mut moved = 0;

    for token in tokens.iter_mut().rev() {
        match token {
            Token::TextRun(run) => {
                pending.clear();
                pending.push_str(run.take_leading_whitespace());
            }
            Token::ClickWait(cw) => {
                if !pending.is_empty() {
                    moved += 1;
                }
                cw.leading_whitespace = std::mem::take(&mut pending);
            }
            _ => {}
        }
    }

    tracing::debug!(click_waits = moved, "moved leading whitespace");
}

/// Runs [redistribute_leading_whitespace] over the flat stream.
#[derive(Debug, Default)]
pub struct LeadingWhitespaceMapper;

impl LeadingWhitespaceMapper {
    pub fn new() -> Self {
        LeadingWhitespaceMapper
    }
}

impl ScriptMapper for LeadingWhitespaceMapper {
    fn name(&self) -> &'static str {
        "leading-whitespace"
    }

    fn map_flat(&mut self, tokens: &mut [Token]) -> Result<(), AdvError> {
        redistribute_leading_whitespace(tokens);
        Ok(())
    }
}
