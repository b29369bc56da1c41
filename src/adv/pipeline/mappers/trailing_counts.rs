//! Trailing character count mapper
//!
//! Walks the whole script once, in order, and gives every wait marker the number of text
//! characters rendered after it, up to the next wait marker. The engine uses the count to
//! time the text animation when the marker fires.
//!
//! The walk is global rather than per line: a marker's trailing text may continue on the
//! following source lines. Text before the first marker of the script belongs to no marker.

use crate::adv::error::AdvError;
use crate::adv::pipeline::mapper::ScriptMapper;
use crate::adv::token::Token;

/// Accumulate trailing character counts onto click-waits and page-waits.
///
/// A marker's count restarts from zero when the walk reaches it, so running the pass twice
/// gives the same counts.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn accumulate_trailing_counts(tokens: &mut [Token]) {
    let mut target: Option<usize> = None;
    let mut unattributed = 0;

    for index in 0..tokens.len() {
        if let Some(marker) = tokens[index].as_wait_marker_mut() {
            *marker.trailing_character_count_mut() = 0;
            target = Some(index);
            continue;
        }

        let count = match &tokens[index] {
            Token::TextRun(run) => run.character_count(),
            _ => continue,
        };

        match target {
            Some(target) => {
                if let Some(marker) = tokens[target].as_wait_marker_mut() {
                    *marker.trailing_character_count_mut() += count;
                }
            }
            None => unattributed += count,
        }
    }

    if unattributed > 0 {
        tracing::trace!(
            characters = unattributed,
            "text before the first wait marker"
        );
    }
}

/// Runs [accumulate_trailing_counts] over the flat stream.
#[derive(Debug, Default)]
pub struct TrailingCountMapper;

impl TrailingCountMapper {
    pub fn new() -> Self {
        TrailingCountMapper
    }
}

impl ScriptMapper for TrailingCountMapper {
    fn name(&self) -> &'static str {
        "trailing-counts"
    }

    fn map_flat(&mut self, tokens: &mut [Token]) -> Result<(), AdvError> {
        accumulate_trailing_counts(tokens);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adv::lexer::tokenize;

    fn counts(tokens: &[Token]) -> Vec<usize> {
        tokens
            .iter()
            .filter_map(|t| t.as_wait_marker().map(|m| m.trailing_character_count()))
            .collect()
    }

    #[test]
    fn test_counts_reset_on_each_marker() {
        let mut tokens = vec![
            Token::click_wait(),
            Token::text("abc"),
            Token::text("de"),
            Token::page_wait(),
            Token::text("fghi"),
        ];
        accumulate_trailing_counts(&mut tokens);
        assert_eq!(counts(&tokens), vec![5, 4]);
    }

    #[test]
    fn test_text_before_first_marker_is_unattributed() {
        let mut tokens = vec![
            Token::text("prologue"),
            Token::click_wait(),
            Token::text("xy"),
        ];
        accumulate_trailing_counts(&mut tokens);
        assert_eq!(counts(&tokens), vec![2]);
    }

    #[test]
    fn test_counts_cross_line_boundaries() {
        let mut script = tokenize("^a^@^bb^\n^ccc^\n^dddd^\\\n^e^");
        accumulate_trailing_counts(script.tokens_mut());
        assert_eq!(counts(script.tokens()), vec![2 + 3 + 4, 1]);
    }

    #[test]
    fn test_other_tokens_do_not_affect_counts() {
        let mut tokens = vec![
            Token::click_wait(),
            Token::literal("!s0"),
            Token::DisableNewLine,
            Token::newline(),
            Token::text("ab"),
        ];
        accumulate_trailing_counts(&mut tokens);
        assert_eq!(counts(&tokens), vec![2]);
    }

    #[test]
    fn test_marker_without_trailing_text_counts_zero() {
        let mut tokens = vec![Token::text("a"), Token::click_wait(), Token::page_wait()];
        accumulate_trailing_counts(&mut tokens);
        assert_eq!(counts(&tokens), vec![0, 0]);
    }

    #[test]
    fn test_rerun_does_not_double_count() {
        let mut tokens = vec![Token::click_wait(), Token::text("abc")];
        accumulate_trailing_counts(&mut tokens);
        accumulate_trailing_counts(&mut tokens);
        assert_eq!(counts(&tokens), vec![3]);
    }
}
