//! Implementation of the script tokenizer
//!
//! Scripts are tokenized line by line. Each line is lexed by logos into [Lexeme]s, which are
//! then turned into model [Token]s, and a single `NewLine` token closes the line.

use crate::adv::lexer::tokens::Lexeme;
use crate::adv::script::Script;
use crate::adv::token::{LineEnding, TextRun, Token};
use logos::Logos;

/// Split a source into lines and their terminators.
///
/// A final line without terminator is reported with `\n` so that every line ends in a
/// newline token. An empty source has no lines.
pub fn split_lines(source: &str) -> impl Iterator<Item = (&str, LineEnding)> {
    source.split_inclusive('\n').map(|piece| {
        if let Some(content) = piece.strip_suffix("\r\n") {
            (content, LineEnding::CrLf)
        } else if let Some(content) = piece.strip_suffix('\n') {
            (content, LineEnding::Lf)
        } else {
            (piece, LineEnding::Lf)
        }
    })
}

/// Tokenize one line (without its terminator), closing it with a `\n` newline token.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    tokenize_line_with_ending(line, LineEnding::Lf)
}

/// Tokenize one line, closing it with a newline token for `ending`.
///
/// Trailing whitespace is dropped first, so a marker at the end of the line is directly
/// followed by the newline token. Tokenization never fails: fragments outside the marker
/// grammar become literals.
pub fn tokenize_line_with_ending(line: &str, ending: LineEnding) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(line.trim_end());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let token = match result {
            Ok(Lexeme::Text) => Token::TextRun(TextRun::new(slice)),
            Ok(Lexeme::ClickWait) => Token::click_wait(),
            Ok(Lexeme::PageWait) => Token::page_wait(),
            Ok(Lexeme::DisableNewLine) => Token::DisableNewLine,
            Ok(Lexeme::Literal) | Err(()) => Token::literal(slice),
        };
        tokens.push(token);
    }

    tokens.push(Token::NewLine { ending });
    tokens
}

/// Tokenize a whole script into the token arena.
pub fn tokenize(source: &str) -> Script {
    let mut script = Script::new();
    for (line, ending) in split_lines(source) {
        script.push_line(tokenize_line_with_ending(line, ending));
    }
    tracing::debug!(
        lines = script.line_count(),
        tokens = script.tokens().len(),
        "tokenized script"
    );
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize_line("^hello^@");
        assert_eq!(kinds(&tokens), ["<text>", "<click-wait>", "<newline>"]);
    }

    #[test]
    fn test_two_click_waits() {
        let tokens = tokenize_line("^hello@^world@");
        assert_eq!(
            kinds(&tokens),
            ["<text>", "<click-wait>", "<text>", "<click-wait>", "<newline>"]
        );
        match &tokens[0] {
            Token::TextRun(run) => {
                assert_eq!(run.body(), "hello");
                assert_eq!(run.character_count(), 5);
            }
            other => panic!("Expected text run, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_whitespace_is_dropped() {
        let tokens = tokenize_line("^hello^@   \t");
        assert_eq!(kinds(&tokens), ["<text>", "<click-wait>", "<newline>"]);
    }

    #[test]
    fn test_empty_line() {
        assert_eq!(tokenize_line(""), vec![Token::newline()]);
    }

    #[test]
    fn test_page_wait_and_disable_newline() {
        let tokens = tokenize_line("^a^\\^b^/");
        assert_eq!(
            kinds(&tokens),
            ["<text>", "<page-wait>", "<text>", "<disable-newline>", "<newline>"]
        );
    }

    #[test]
    fn test_commands_are_literals() {
        let tokens = tokenize_line("langen:^Hi.^@:wait 300");
        assert_eq!(tokens[0], Token::literal("langen:"));
        assert_eq!(tokens[3], Token::literal(":wait 300"));
    }

    #[test]
    fn test_split_lines_endings() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(
            lines,
            vec![
                ("a", LineEnding::CrLf),
                ("b", LineEnding::Lf),
                ("c", LineEnding::Lf)
            ]
        );
    }

    #[test]
    fn test_split_lines_empty_source() {
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_tokenize_builds_line_spans() {
        let script = tokenize("^a^@\n\n^b^\\\n");
        assert_eq!(script.line_count(), 3);
        assert_eq!(script.lines()[0].tokens, 0..3);
        assert_eq!(script.lines()[1].tokens, 3..4);
        assert_eq!(script.lines()[2].tokens, 4..7);
        assert_eq!(script.lines()[2].number, 3);
    }

    #[test]
    fn test_tokenize_keeps_crlf() {
        let script = tokenize("^a^@\r\n");
        assert_eq!(
            script.tokens().last(),
            Some(&Token::NewLine {
                ending: LineEnding::CrLf
            })
        );
    }
}
