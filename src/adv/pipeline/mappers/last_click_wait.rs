//! Line-terminal click-wait mapper
//!
//! Marks the last click-wait of a line as line-terminal when the engine renders a newline
//! right after it. Only that case needs the flag:
//!
//!     ^this is a test @^more text @\n     the last `@` is followed by the newline: terminal
//!     ^this is a test @^more text\n       the trailing text produces the newline: not terminal
//!
//! Earlier click-waits on the line are always cleared. Lines without click-waits are left
//! untouched.

use crate::adv::error::{AdvError, MalformedLine};
use crate::adv::lexer::detokenize;
use crate::adv::pipeline::mapper::ScriptMapper;
use crate::adv::script::LineSpan;
use crate::adv::token::Token;

/// Flag the last click-wait on one line if a newline token directly follows it.
///
/// Fails when the click-wait is the last token of the line: every line must end with a
/// newline token.
pub fn mark_last_click_wait_on_line(tokens: &mut [Token]) -> Result<(), MalformedLine> {
    let mut last_click_wait = None;
    for (index, token) in tokens.iter_mut().enumerate() {
        if let Token::ClickWait(cw) = token {
            cw.is_line_terminal = false;
            last_click_wait = Some(index);
        }
    }

    let Some(index) = last_click_wait else {
        return Ok(());
    };

    let followed_by_newline = match tokens.get(index + 1) {
        Some(next) => next.is_newline(),
        None => {
            return Err(MalformedLine {
                content: detokenize(tokens),
            })
        }
    };

    if followed_by_newline {
        if let Token::ClickWait(cw) = &mut tokens[index] {
            cw.is_line_terminal = true;
        }
    }
    Ok(())
}

/// Runs [mark_last_click_wait_on_line] over every line.
#[derive(Debug, Default)]
pub struct LastClickWaitMapper {
    terminal_lines: usize,
}

impl LastClickWaitMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines whose last click-wait was flagged.
    pub fn terminal_lines(&self) -> usize {
        self.terminal_lines
    }
}

impl ScriptMapper for LastClickWaitMapper {
    fn name(&self) -> &'static str {
        "last-click-wait"
    }

    fn map_line(&mut self, line: &LineSpan, tokens: &mut [Token]) -> Result<(), AdvError> {
        mark_last_click_wait_on_line(tokens).map_err(|source| AdvError::MalformedLine {
            line: line.number,
            source,
        })?;
        if tokens
            .iter()
            .any(|t| matches!(t, Token::ClickWait(cw) if cw.is_line_terminal))
        {
            self.terminal_lines += 1;
        }
        Ok(())
    }

    fn map_flat(&mut self, _tokens: &mut [Token]) -> Result<(), AdvError> {
        tracing::debug!(
            terminal_lines = self.terminal_lines,
            "marked line-terminal click-waits"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adv::lexer::tokenize_line;
    use crate::adv::pipeline::mapper::walk_script;
    use crate::adv::script::Script;

    fn terminal_flags(tokens: &[Token]) -> Vec<bool> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::ClickWait(cw) => Some(cw.is_line_terminal),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_last_click_wait_before_newline_is_terminal() {
        let mut tokens = tokenize_line("^hello@^world@");
        mark_last_click_wait_on_line(&mut tokens).unwrap();
        assert_eq!(terminal_flags(&tokens), vec![false, true]);
    }

    #[test]
    fn test_trailing_text_prevents_terminal() {
        let mut tokens = tokenize_line("^this is a test @^more text");
        mark_last_click_wait_on_line(&mut tokens).unwrap();
        assert_eq!(terminal_flags(&tokens), vec![false]);
    }

    #[test]
    fn test_disable_newline_after_click_wait_prevents_terminal() {
        let mut tokens = tokenize_line("^text^@/");
        mark_last_click_wait_on_line(&mut tokens).unwrap();
        assert_eq!(terminal_flags(&tokens), vec![false]);
    }

    #[test]
    fn test_earlier_flags_are_cleared() {
        let mut tokens = tokenize_line("^a^@^b^@^c^");
        if let Token::ClickWait(cw) = &mut tokens[1] {
            cw.is_line_terminal = true;
        }
        mark_last_click_wait_on_line(&mut tokens).unwrap();
        assert_eq!(terminal_flags(&tokens), vec![false, false]);
    }

    #[test]
    fn test_line_without_click_wait_is_untouched() {
        let mut tokens = tokenize_line("^a^\\^b^/");
        let before = tokens.clone();
        mark_last_click_wait_on_line(&mut tokens).unwrap();
        assert_eq!(tokens, before);
    }

    #[test]
    fn test_click_wait_as_last_token_is_malformed() {
        let mut tokens = vec![Token::text("oops"), Token::click_wait()];
        let err = mark_last_click_wait_on_line(&mut tokens).unwrap_err();
        assert_eq!(err.content, "^oops^@");
    }

    #[test]
    fn test_mapper_reports_line_number() {
        let mut script = Script::from_lines(vec![
            tokenize_line("^fine^@"),
            vec![Token::text("broken"), Token::click_wait()],
        ]);
        let err = walk_script(&mut script, &mut LastClickWaitMapper::new()).unwrap_err();
        match err {
            AdvError::MalformedLine { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source.content, "^broken^@");
            }
            other => panic!("Expected MalformedLine, got {:?}", other),
        }
    }

    #[test]
    fn test_mapper_counts_terminal_lines() {
        let mut script = Script::from_lines(vec![
            tokenize_line("^a^@"),
            tokenize_line("^b^@^c^"),
            tokenize_line("^d^@"),
        ]);
        let mut mapper = LastClickWaitMapper::new();
        walk_script(&mut script, &mut mapper).unwrap();
        assert_eq!(mapper.terminal_lines(), 2);
    }
}
