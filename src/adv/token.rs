//! Token model shared by the lexer, the annotation passes and the writers.
//!
//!     A script line is lexed into a closed set of tokens. Text runs carry the dialogue,
//!     wait markers pace it, and the remaining variants only matter through their position:
//!
//!         TextRun         `^some text^`, or an unterminated `^some text`
//!         ClickWait       `@`, wait for the player before continuing
//!         PageWait        `\`, wait and clear the page
//!         DisableNewLine  `/`, suppress the newline the engine emits at line end
//!         NewLine         the line terminator, always the last token of a line
//!         Literal         anything else (engine commands, labels), carried verbatim
//!
//!     Every token has a raw form. Writing a script is the concatenation of the raw forms
//!     in order, so any pass that changes what the engine should see rewrites the raw form
//!     in place rather than keeping a side table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Opening and closing delimiter of a text run.
pub const TEXT_DELIMITER: char = '^';

/// Non-printing byte injected after the opening delimiter of every text run. The engine
/// uses it to detect displayable text.
pub const CONTROL_MARKER: char = '\u{10}';

static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(\s*)(.*)$").expect("static regex is valid"));

/// Line terminator found in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A run of dialogue text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRun {
    raw: String,
    character_count: usize,
    /// Leading whitespace handed to the preceding click-wait. `Some` once the raw form
    /// has been rewritten with the control marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    moved_whitespace: Option<String>,
}

impl TextRun {
    /// Build a text run from its raw form (delimiters included). The character count is
    /// the number of chars in the body.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let character_count = body_of(&raw).chars().count();
        TextRun {
            raw,
            character_count,
            moved_whitespace: None,
        }
    }

    /// Build a delimited text run around `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(format!("{TEXT_DELIMITER}{text}{TEXT_DELIMITER}"))
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn character_count(&self) -> usize {
        self.character_count
    }

    /// The text between the delimiters, without a control marker.
    pub fn body(&self) -> &str {
        body_of(&self.raw)
    }

    /// Strip the leading whitespace off the body and rewrite the raw form as
    /// `^` + control marker + remainder + `^`. Returns the stripped whitespace.
    ///
    /// The rewrite happens once per run. Later calls leave the raw form alone and return
    /// the whitespace stripped the first time.
    pub fn take_leading_whitespace(&mut self) -> &str {
        if self.moved_whitespace.is_none() {
            let (whitespace, remainder) = split_leading_whitespace(body_of(&self.raw));
            let (whitespace, remainder) = (whitespace.to_string(), remainder.to_string());
            self.raw = format!("{TEXT_DELIMITER}{CONTROL_MARKER}{remainder}{TEXT_DELIMITER}");
            self.moved_whitespace = Some(whitespace);
        }
        self.moved_whitespace.as_deref().unwrap_or_default()
    }
}

fn body_of(raw: &str) -> &str {
    let body = raw.strip_prefix(TEXT_DELIMITER).unwrap_or(raw);
    let body = body.strip_suffix(TEXT_DELIMITER).unwrap_or(body);
    body.strip_prefix(CONTROL_MARKER).unwrap_or(body)
}

/// Split `text` into its longest whitespace prefix and the remainder.
pub fn split_leading_whitespace(text: &str) -> (&str, &str) {
    match LEADING_WHITESPACE.captures(text) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(ws), Some(rest)) => (ws.as_str(), rest.as_str()),
            _ => ("", text),
        },
        None => ("", text),
    }
}

/// Shared capability of the two pacing markers: both learn how much text follows them.
pub trait WaitMarker {
    fn trailing_character_count(&self) -> usize;
    fn trailing_character_count_mut(&mut self) -> &mut usize;
}

/// `@`: pause until the player clicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickWait {
    raw: String,
    pub trailing_character_count: usize,
    pub is_line_terminal: bool,
    pub leading_whitespace: String,
}

impl ClickWait {
    pub fn new() -> Self {
        ClickWait {
            raw: "@".to_string(),
            trailing_character_count: 0,
            is_line_terminal: false,
            leading_whitespace: String::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }
}

impl Default for ClickWait {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitMarker for ClickWait {
    fn trailing_character_count(&self) -> usize {
        self.trailing_character_count
    }

    fn trailing_character_count_mut(&mut self) -> &mut usize {
        &mut self.trailing_character_count
    }
}

/// `\`: pause, then clear the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWait {
    raw: String,
    pub trailing_character_count: usize,
}

impl PageWait {
    pub fn new() -> Self {
        PageWait {
            raw: "\\".to_string(),
            trailing_character_count: 0,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }
}

impl Default for PageWait {
    fn default() -> Self {
        Self::new()
    }
}

impl WaitMarker for PageWait {
    fn trailing_character_count(&self) -> usize {
        self.trailing_character_count
    }

    fn trailing_character_count_mut(&mut self) -> &mut usize {
        &mut self.trailing_character_count
    }
}

/// All tokens a script line can be made of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Token {
    TextRun(TextRun),
    ClickWait(ClickWait),
    PageWait(PageWait),
    DisableNewLine,
    NewLine { ending: LineEnding },
    Literal { raw: String },
}

impl Token {
    pub fn text(text: &str) -> Self {
        Token::TextRun(TextRun::from_text(text))
    }

    pub fn click_wait() -> Self {
        Token::ClickWait(ClickWait::new())
    }

    pub fn page_wait() -> Self {
        Token::PageWait(PageWait::new())
    }

    pub fn newline() -> Self {
        Token::NewLine {
            ending: LineEnding::Lf,
        }
    }

    pub fn literal(raw: impl Into<String>) -> Self {
        Token::Literal { raw: raw.into() }
    }

    /// The text this token contributes to the written script.
    pub fn raw(&self) -> &str {
        match self {
            Token::TextRun(run) => run.raw(),
            Token::ClickWait(cw) => cw.raw(),
            Token::PageWait(pw) => pw.raw(),
            Token::DisableNewLine => "/",
            Token::NewLine { ending } => ending.as_str(),
            Token::Literal { raw } => raw,
        }
    }

    pub fn is_newline(&self) -> bool {
        matches!(self, Token::NewLine { .. })
    }

    pub fn is_click_wait(&self) -> bool {
        matches!(self, Token::ClickWait(_))
    }

    /// Suppresses the automatic end-of-line newline.
    pub fn suppresses_newline(&self) -> bool {
        matches!(self, Token::DisableNewLine | Token::PageWait(_))
    }

    pub fn as_wait_marker(&self) -> Option<&dyn WaitMarker> {
        match self {
            Token::ClickWait(cw) => Some(cw),
            Token::PageWait(pw) => Some(pw),
            _ => None,
        }
    }

    pub fn as_wait_marker_mut(&mut self) -> Option<&mut dyn WaitMarker> {
        match self {
            Token::ClickWait(cw) => Some(cw),
            Token::PageWait(pw) => Some(pw),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Token::TextRun(_) => "text",
            Token::ClickWait(_) => "click-wait",
            Token::PageWait(_) => "page-wait",
            Token::DisableNewLine => "disable-newline",
            Token::NewLine { .. } => "newline",
            Token::Literal { .. } => "literal",
        };
        write!(f, "<{}>", name)
    }
}
