use crate::collab::graphics::GraphicsContext;
use crate::compiler::bytecode::Program;
use crate::compiler::error::RuntimeFailure;
use crate::compiler::noise::NoiseField;
use crate::compiler::vm;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;

/// Frame-level values a routine can read, plus the `frame` value it assigned, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameGlobals {
    pub frame: u64,
    pub time_ms: f64,
    pub assigned_frame: Option<u64>,
}

impl FrameGlobals {
    pub fn new(frame: u64, time_ms: f64) -> Self {
        Self {
            frame,
            time_ms,
            assigned_frame: None,
        }
    }

    /// The frame index the routine observes: its own assignment wins.
    pub fn current_frame(&self) -> u64 {
        self.assigned_frame.unwrap_or(self.frame)
    }
}

/// Capabilities handed to a routine for one invocation.
pub struct RunContext<'a> {
    pub graphics: &'a mut dyn GraphicsContext,
    pub globals: &'a mut FrameGlobals,
    pub rng: &'a mut StdRng,
    pub noise: &'a mut NoiseField,
    /// Source lines whose `doOnce` ran during this invocation.
    pub do_once: &'a mut Vec<usize>,
}

/// An invocable compilation result. Clones share the compilation; equality is identity.
#[derive(Clone)]
pub struct CompiledRoutine {
    inner: Arc<RoutineInner>,
}

struct RoutineInner {
    program: Option<Program>,
}

impl CompiledRoutine {
    pub(crate) fn new(program: Program) -> Self {
        Self {
            inner: Arc::new(RoutineInner {
                program: Some(program),
            }),
        }
    }

    /// A routine that does nothing, installed for empty source.
    pub fn noop() -> Self {
        Self {
            inner: Arc::new(RoutineInner { program: None }),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.inner
            .program
            .as_ref()
            .is_none_or(|p| p.body.is_empty())
    }

    pub fn invoke(&self, ctx: &mut RunContext<'_>) -> Result<(), RuntimeFailure> {
        match &self.inner.program {
            Some(program) => vm::run(program, ctx),
            None => Ok(()),
        }
    }
}

impl PartialEq for CompiledRoutine {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for CompiledRoutine {}

impl fmt::Debug for CompiledRoutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stmts = self.inner.program.as_ref().map_or(0, |p| p.body.len());
        f.debug_struct("CompiledRoutine")
            .field("ptr", &Arc::as_ptr(&self.inner))
            .field("stmts", &stmts)
            .finish()
    }
}
