//! Detokenizer for scripts
//!
//! Converts a stream of tokens back into script text. This is the write path: each token's
//! current raw form is emitted in order with no further interpretation.
use crate::adv::token::Token;

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::raw).collect()
}
