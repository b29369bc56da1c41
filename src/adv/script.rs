//! Token arena for one conversion run
//!
//!     The passes need two views of the same tokens: the flat script order, and the tokens
//!     grouped by source line. Both are served from one `Vec<Token>`; a line is an index
//!     span into it. A mutation made through a line slice is therefore visible in the flat
//!     view and the other way round, without shared-ownership pointers.
//!
//!     Lines are contiguous, ordered and non-empty, together cover the whole arena, and each
//!     ends with its only newline token. [Script::from_parts] checks this for arenas built
//!     outside the tokenizer.

use crate::adv::error::AdvError;
use crate::adv::token::Token;
use serde::Serialize;
use std::ops::Range;

/// Location of one source line in the token arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSpan {
    /// 1-based line number in the source.
    pub number: usize,
    /// Indices of the line's tokens in the flat stream.
    pub tokens: Range<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    tokens: Vec<Token>,
    lines: Vec<LineSpan>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a script from one token list per line.
    pub fn from_lines(lines: impl IntoIterator<Item = Vec<Token>>) -> Self {
        let mut script = Script::new();
        for line in lines {
            script.push_line(line);
        }
        script
    }

    /// Build a script from an arena and its line spans, checking the spans' shape and that
    /// every line is closed by exactly one newline token.
    pub fn from_parts(tokens: Vec<Token>, lines: Vec<LineSpan>) -> Result<Self, AdvError> {
        let mut expected_start = 0;
        for line in &lines {
            if line.tokens.start != expected_start {
                return Err(AdvError::ContractViolation(format!(
                    "line {} starts at token {}, expected {}",
                    line.number, line.tokens.start, expected_start
                )));
            }
            if line.tokens.is_empty() {
                return Err(AdvError::ContractViolation(format!(
                    "line {} has no tokens",
                    line.number
                )));
            }
            if line.tokens.end > tokens.len() {
                return Err(AdvError::ContractViolation(format!(
                    "line {} ends at token {} but the script has {} tokens",
                    line.number,
                    line.tokens.end,
                    tokens.len()
                )));
            }
            let line_tokens = &tokens[line.tokens.clone()];
            let newlines = line_tokens.iter().filter(|t| t.is_newline()).count();
            let ends_with_newline = line_tokens.last().is_some_and(Token::is_newline);
            if newlines != 1 || !ends_with_newline {
                return Err(AdvError::ContractViolation(format!(
                    "line {} must end with exactly one newline token, found {}",
                    line.number, newlines
                )));
            }
            expected_start = line.tokens.end;
        }
        if expected_start != tokens.len() {
            return Err(AdvError::ContractViolation(format!(
                "{} trailing tokens do not belong to any line",
                tokens.len() - expected_start
            )));
        }
        Ok(Script { tokens, lines })
    }

    /// Append a line to the arena.
    pub fn push_line(&mut self, line: Vec<Token>) {
        let start = self.tokens.len();
        self.tokens.extend(line);
        self.lines.push(LineSpan {
            number: self.lines.len() + 1,
            tokens: start..self.tokens.len(),
        });
    }

    /// The flat view, in script order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Tokens of the line at `index` (0-based position in [Script::lines]).
    pub fn line_tokens(&self, index: usize) -> Option<&[Token]> {
        let span = self.lines.get(index)?;
        self.tokens.get(span.tokens.clone())
    }

    pub fn line_tokens_mut(&mut self, index: usize) -> Option<&mut [Token]> {
        let span = self.lines.get(index)?;
        self.tokens.get_mut(span.tokens.clone())
    }
}
