use crate::compiler::{CompiledRoutine, RunContext, RuntimeFailure};

/// Consecutive successful invocations after which a routine becomes the fallback.
pub const STABILITY_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No routine is installed.
    Idle,
    /// The routine ran; `became_stable` is set on the invocation that promoted it.
    Ran {
        became_stable: bool,
        /// Source lines of the `doOnce` blocks that ran.
        do_once: Vec<usize>,
    },
    Failed(RuntimeFailure),
}

/// Runs the active routine and keeps the last routine that proved stable.
#[derive(Debug, Default)]
pub struct ProgramRunner {
    active: Option<CompiledRoutine>,
    stable: Option<CompiledRoutine>,
    counter: u32,
}

impl ProgramRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&CompiledRoutine> {
        self.active.as_ref()
    }

    pub fn stable(&self) -> Option<&CompiledRoutine> {
        self.stable.as_ref()
    }

    pub fn consecutive_successes(&self) -> u32 {
        self.counter
    }

    pub fn set_routine(&mut self, routine: CompiledRoutine) {
        self.active = Some(routine);
        self.counter = 0;
    }

    /// Forget both routines; used when the source becomes empty.
    pub fn clear(&mut self) {
        self.active = None;
        self.stable = None;
        self.counter = 0;
    }

    /// Invoke the active routine once.
    pub fn tick(&mut self, ctx: &mut RunContext<'_>) -> TickOutcome {
        let Some(routine) = &self.active else {
            return TickOutcome::Idle;
        };
        ctx.do_once.clear();
        if let Err(failure) = routine.invoke(ctx) {
            ctx.do_once.clear();
            return TickOutcome::Failed(failure);
        }
        self.counter = self.counter.saturating_add(1);
        let became_stable = self.counter == STABILITY_THRESHOLD;
        if became_stable {
            self.stable = self.active.clone();
            tracing::debug!("routine promoted to stable");
        }
        TickOutcome::Ran {
            became_stable,
            do_once: std::mem::take(ctx.do_once),
        }
    }

    /// Replace the active routine with the stable one, which may be none.
    pub fn revert_to_stable(&mut self) {
        self.active = self.stable.clone();
        self.counter = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/runner.rs"]
mod tests;
