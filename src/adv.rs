//! Main module for adv-mode library functionality

pub mod config;
pub mod error;
pub mod lexer;
pub mod pipeline;
pub mod processor;
pub mod report;
pub mod script;
pub mod token;

pub use error::{AdvError, MalformedLine};
pub use script::{LineSpan, Script};
pub use token::{ClickWait, LineEnding, PageWait, TextRun, Token, WaitMarker};
