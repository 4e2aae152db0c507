//! Compiler for the canonical script produced by the source transformer.
//!
//! Pipeline: indentation-aware lexer, recursive-descent parser, identifier binding and
//! lowering of every expression to bytecode, and a small stack VM that runs the lowered
//! statement tree against a [`RunContext`].

pub mod error;
pub mod noise;
pub mod routine;
pub mod value;
pub mod vocabulary;

pub(crate) mod ast;
pub(crate) mod bytecode;
pub(crate) mod lexer;
pub(crate) mod lower;
pub(crate) mod parser;
pub(crate) mod vm;

pub use error::{CompileError, RuntimeFailure};
pub use noise::NoiseField;
pub use routine::{CompiledRoutine, FrameGlobals, RunContext};
pub use value::Value;

/// Turns canonical script text into an invocable routine.
pub trait Compiler {
    fn compile(&self, text: &str) -> Result<CompiledRoutine, CompileError>;
}

/// The built-in [`Compiler`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptCompiler;

impl Compiler for ScriptCompiler {
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    fn compile(&self, text: &str) -> Result<CompiledRoutine, CompileError> {
        let stmts = parser::parse_program(text)?;
        let program = lower::lower_program(text, &stmts)?;
        tracing::trace!(
            stmts = program.body.len(),
            locals = program.slot_names.len(),
            "compiled script"
        );
        Ok(CompiledRoutine::new(program))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compiler/routine.rs"]
mod tests;
