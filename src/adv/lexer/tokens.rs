//! Lexical grammar of a script line
//!
//! This module defines the raw lexemes produced by the logos lexer. They carry no payload;
//! [lexer_impl](super::lexer_impl) turns them into [Token](crate::adv::token::Token)s using
//! the matched slice.
use logos::Logos;

/// All possible lexemes of a single script line (without its terminator).
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    // Text run: `^body^` or an unterminated `^body`. The body never crosses a wait marker.
    #[regex(r"\^[^\^@\\\n]*\^?")]
    Text,

    #[token("@")]
    ClickWait,

    #[token("\\")]
    PageWait,

    #[token("/")]
    DisableNewLine,

    // Anything else, carried verbatim
    #[regex(r"[^\^@\\/\n]+")]
    Literal,
}
