//! Line-level newline prediction.
//!
//! The engine ends every rendered line with a newline unless the line disables it with `/`
//! or contains a page-wait, which clears the page instead.

use crate::adv::token::Token;

/// Whether the engine would render a newline at the end of this line.
pub fn line_has_trailing_newline(tokens: &[Token]) -> bool {
    !tokens.iter().any(Token::suppresses_newline)
}
