//! Error types for the annotation pipeline and the conversion layer around it.
//!
//! Nothing here is recoverable. Every variant aborts the run before any output is
//! written: a structural violation means the tokenizer or the input is broken and
//! must be fixed upstream.

use std::path::PathBuf;
use thiserror::Error;

/// A click-wait was found as the very last token of a line.
///
/// Every tokenized line ends with a newline token, so this can only happen when the
/// token list was built by hand or by a broken tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("click-wait was the last token on the line (the last token should always be a newline): {content:?}")]
pub struct MalformedLine {
    /// The line reconstructed from the raw forms of its tokens.
    pub content: String,
}

/// Errors surfaced by the adv-mode library.
#[derive(Debug, Error)]
pub enum AdvError {
    /// The token arena does not have the shape the passes rely on.
    #[error("contract violation: {0}")]
    ContractViolation(String),

    #[error("line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: MalformedLine,
    },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid output format: {0}")]
    InvalidFormat(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AdvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AdvError::Io {
            path: path.into(),
            source,
        }
    }
}
