//! File processing API for scripts
//!
//! This module ties the pieces together: read a script, tokenize it, run the annotation
//! pipeline, and render the result in one of the output formats:
//!
//! - `script`: the annotated script itself, ready for the engine
//! - `token-simple`: one `<kind>` tag per token, one source line per output line
//! - `token-json`: every token with all its fields
//! - `report-json`: the per-line [report](crate::adv::report)
//!
//! Output files are written through a temporary file in the destination directory and
//! only replace the target once complete, so a failed run never leaves a truncated script.

use crate::adv::config::AdvConfig;
use crate::adv::error::AdvError;
use crate::adv::lexer::{detokenize, tokenize};
use crate::adv::pipeline::PipelineExecutor;
use crate::adv::report::line_reports;
use crate::adv::script::Script;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tempfile::NamedTempFile;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Script,
    TokenSimple,
    TokenJson,
    ReportJson,
}

impl OutputFormat {
    /// Get all available output formats
    pub fn available() -> [OutputFormat; 4] {
        [
            OutputFormat::Script,
            OutputFormat::TokenSimple,
            OutputFormat::TokenJson,
            OutputFormat::ReportJson,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Script => "script",
            OutputFormat::TokenSimple => "token-simple",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::ReportJson => "report-json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AdvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::available()
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| AdvError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenize and annotate `source`, then render it in `format`.
pub fn process_source(
    source: &str,
    config: &AdvConfig,
    format: OutputFormat,
) -> Result<String, AdvError> {
    let mut script = tokenize(source);
    PipelineExecutor::new(config.render.clone()).execute(&mut script)?;
    format_script(&script, format)
}

/// Render an already annotated script.
pub fn format_script(script: &Script, format: OutputFormat) -> Result<String, AdvError> {
    match format {
        OutputFormat::Script => Ok(detokenize(script.tokens())),
        OutputFormat::TokenSimple => Ok(format_tokens_simple(script)),
        OutputFormat::TokenJson => Ok(serde_json::to_string_pretty(script.tokens())?),
        OutputFormat::ReportJson => Ok(serde_json::to_string_pretty(&line_reports(script))?),
    }
}

fn format_tokens_simple(script: &Script) -> String {
    let mut out = String::new();
    for token in script.tokens() {
        out.push_str(&token.to_string());
        if token.is_newline() {
            out.push('\n');
        }
    }
    out
}

/// Read a script from disk.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, AdvError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| AdvError::io(path, e))
}

/// Process a script file and return the rendered output.
pub fn process_file(
    path: impl AsRef<Path>,
    config: &AdvConfig,
    format: OutputFormat,
) -> Result<String, AdvError> {
    let path = path.as_ref();
    let source = read_source(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read script");
    process_source(&source, config, format)
}

/// Write `contents` to `path`, replacing it only once everything was written.
pub fn write_output(path: impl AsRef<Path>, contents: &str) -> Result<(), AdvError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| AdvError::io(dir, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| AdvError::io(file.path(), e))?;
    file.persist(path).map_err(|e| AdvError::io(path, e.error))?;
    Ok(())
}

/// Convert `input` into `output` using the configured output format.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &AdvConfig,
) -> Result<(), AdvError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let rendered = process_file(input, config, config.output.format)?;
    write_output(output, &rendered)?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        format = %config.output.format,
        "converted script"
    );
    Ok(())
}
