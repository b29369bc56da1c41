//! Wait marker stamping mapper
//!
//! The annotation passes only update token fields. This last pass writes those fields into
//! the raw form of each wait marker, as the engine command that replaces it:
//!
//!     @   ->  :adv_clickwait <trailing count>,<line terminal 0|1>,"<leading whitespace>":
//!     \   ->  :adv_pagewait <trailing count>:
//!
//! Command names come from [RenderConfig].

use crate::adv::config::RenderConfig;
use crate::adv::error::AdvError;
use crate::adv::pipeline::mapper::ScriptMapper;
use crate::adv::token::Token;

/// Rewrite every wait marker's raw form into its annotated engine command.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn stamp_wait_markers(tokens: &mut [Token], config: &RenderConfig) {
    for token in tokens.iter_mut() {
        match token {
            Token::ClickWait(cw) => {
                let raw = format!(
                    ":{} {},{},\"{}\":",
                    config.click_wait_command,
                    cw.trailing_character_count,
                    u8::from(cw.is_line_terminal),
                    cw.leading_whitespace
                );
                cw.set_raw(raw);
            }
            Token::PageWait(pw) => {
                let raw = format!(
                    ":{} {}:",
                    config.page_wait_command, pw.trailing_character_count
                );
                pw.set_raw(raw);
            }
            _ => {}
        }
    }
}

/// Runs [stamp_wait_markers] over the flat stream.
#[derive(Debug)]
pub struct StampWaitMarkersMapper<'a> {
    config: &'a RenderConfig,
}

impl<'a> StampWaitMarkersMapper<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        StampWaitMarkersMapper { config }
    }
}

impl ScriptMapper for StampWaitMarkersMapper<'_> {
    fn name(&self) -> &'static str {
        "stamp-wait-markers"
    }

    fn map_flat(&mut self, tokens: &mut [Token]) -> Result<(), AdvError> {
        stamp_wait_markers(tokens, self.config);
        Ok(())
    }
}
