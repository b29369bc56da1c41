//! Pipeline executor that runs the annotation passes in order

use crate::adv::config::RenderConfig;
use crate::adv::error::AdvError;
use crate::adv::pipeline::mapper::walk_script;
use crate::adv::pipeline::mappers::*;
use crate::adv::script::Script;

/// Runs the annotation passes over a script.
///
/// The order is fixed:
/// 1. LastClickWait - per line, flag click-waits followed by a newline
/// 2. TrailingCounts - forward over the whole script
/// 3. LeadingWhitespace - backward over the whole script; rewrites the text counted in 2
/// 4. StampWaitMarkers - write the annotations into the wait markers (optional)
#[derive(Debug, Clone)]
pub struct PipelineExecutor {
    render: RenderConfig,
}

impl PipelineExecutor {
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Annotate `script` in place. On error the script is left partially annotated and must
    /// not be written.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = script.line_count()))]
    pub fn execute(&self, script: &mut Script) -> Result<(), AdvError> {
        walk_script(script, &mut LastClickWaitMapper::new())?;
        walk_script(script, &mut TrailingCountMapper::new())?;
        walk_script(script, &mut LeadingWhitespaceMapper::new())?;

        if self.render.stamp_wait_markers {
            walk_script(script, &mut StampWaitMarkersMapper::new(&self.render))?;
        }
        Ok(())
    }
}

/// Annotate `script` in place with the given render settings.
pub fn annotate(script: &mut Script, render: &RenderConfig) -> Result<(), AdvError> {
    PipelineExecutor::new(render.clone()).execute(script)
}
