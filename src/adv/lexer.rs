//! Lexer module for scripts
//!
//! This module contains the tokenization logic, from source text to the token arena the
//! annotation passes work on, and the detokenizer that writes it back.
//!
//! Line Handling
//!
//! The engine renders a newline at the end of every source line unless something on the
//! line suppresses it, so line boundaries matter to the passes. Each line is lexed on its
//! own and always ends with exactly one newline token; the arena records where each line
//! starts and ends in the flat token stream.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::{split_lines, tokenize, tokenize_line, tokenize_line_with_ending};
pub use tokens::Lexeme;
