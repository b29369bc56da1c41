//! Per-line summary of an annotated script, for inspecting what the passes decided.

use crate::adv::pipeline::line_has_trailing_newline;
use crate::adv::script::Script;
use crate::adv::token::Token;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    pub line: usize,
    pub has_trailing_newline: bool,
    pub click_waits: usize,
    pub page_waits: usize,
    pub terminal_click_wait: bool,
    pub text_characters: usize,
}

impl LineReport {
    fn from_tokens(line: usize, tokens: &[Token]) -> Self {
        let mut report = LineReport {
            line,
            has_trailing_newline: line_has_trailing_newline(tokens),
            click_waits: 0,
            page_waits: 0,
            terminal_click_wait: false,
            text_characters: 0,
        };
        for token in tokens {
            match token {
                Token::ClickWait(cw) => {
                    report.click_waits += 1;
                    report.terminal_click_wait |= cw.is_line_terminal;
                }
                Token::PageWait(_) => report.page_waits += 1,
                Token::TextRun(run) => report.text_characters += run.character_count(),
                _ => {}
            }
        }
        report
    }
}

/// One report per source line, in order.
pub fn line_reports(script: &Script) -> Vec<LineReport> {
    script
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(index, span)| {
            script
                .line_tokens(index)
                .map(|tokens| LineReport::from_tokens(span.number, tokens))
        })
        .collect()
}
