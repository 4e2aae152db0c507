//! Source transformer: rewrites authoring syntax into the canonical script and compiles it.

pub mod passes;

pub use passes::{PASSES, Pass, mark_do_once_lines};

use crate::compiler::{CompiledRoutine, Compiler, ScriptCompiler};
use crate::foundation::error::LiveResult;

/// Outcome of transforming one source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed {
    /// The source was empty; nothing should run.
    Empty(CompiledRoutine),
    Routine(CompiledRoutine),
}

impl Transformed {
    pub fn routine(&self) -> &CompiledRoutine {
        match self {
            Self::Empty(r) | Self::Routine(r) => r,
        }
    }
}

/// Run every rewrite pass in order and return the canonical script.
///
/// Empty input stays empty.
pub fn transform_source(code: &str) -> LiveResult<String> {
    let mut out = code.to_owned();
    if out.is_empty() {
        return Ok(out);
    }
    for (name, pass) in PASSES {
        out = pass(&out)?;
        tracing::trace!(pass = name, len = out.len(), "rewrite pass done");
    }
    Ok(out)
}

pub struct SourceTransformer {
    compiler: Box<dyn Compiler>,
}

impl Default for SourceTransformer {
    fn default() -> Self {
        Self::new(Box::new(ScriptCompiler))
    }
}

impl std::fmt::Debug for SourceTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceTransformer").finish_non_exhaustive()
    }
}

impl SourceTransformer {
    pub fn new(compiler: Box<dyn Compiler>) -> Self {
        Self { compiler }
    }

    /// Rewrite and compile `code`. Rewrite failures surface as `LiveError::Syntax`, compiler
    /// rejections as `LiveError::Compile` with the compiler's message.
    #[tracing::instrument(level = "debug", skip_all, fields(len = code.len()))]
    pub fn transform(&self, code: &str) -> LiveResult<Transformed> {
        if code.is_empty() {
            return Ok(Transformed::Empty(CompiledRoutine::noop()));
        }
        let script = transform_source(code)?;
        let routine = self.compiler.compile(&script)?;
        Ok(Transformed::Routine(routine))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/transformer.rs"]
mod tests;
