use crate::collab::{Clock, Collaborators, FrameClock, GraphicsContext, Renderer, Scene, SoundSystem};
use crate::compiler::{FrameGlobals, NoiseField, RunContext, RuntimeFailure};
use crate::foundation::core::{FrameIndex, FrameRate};
use crate::foundation::error::LiveResult;
use crate::runtime::events::{EventBus, LiveEvent};
use crate::runtime::runner::{ProgramRunner, TickOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Dozing: no routine to run, no tick armed.
    #[default]
    Idle,
    Running,
}

/// Frame counter and the time base that `time` is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameState {
    pub frame: FrameIndex,
    pub origin_ms: f64,
    pub elapsed_ms: f64,
}

impl FrameState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickReport {
    /// No routine was active; the loop went idle.
    Dozed,
    /// The routine ran and its scene was rendered as this frame.
    Rendered(FrameIndex),
    /// The routine failed; nothing was rendered and the stable routine took over.
    RuntimeError(RuntimeFailure),
}

/// Deferred per-tick work run after a successful invocation that executed `doOnce` blocks.
pub trait Bookkeeping {
    fn do_once_executed(&mut self, runner: &mut ProgramRunner, events: &mut EventBus, lines: &[usize]);
}

/// Skips `doOnce` re-marking; for driving a scheduler without a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBookkeeping;

impl Bookkeeping for NoBookkeeping {
    fn do_once_executed(&mut self, _: &mut ProgramRunner, _: &mut EventBus, _: &[usize]) {}
}

/// Drives the per-tick cycle: arm the next tick, reset the collaborators, run the active
/// routine, do the bookkeeping, render.
pub struct FrameScheduler {
    state: LoopState,
    frame: FrameState,
    rate: FrameRate,
    rng: StdRng,
    noise: NoiseField,
    do_once: Vec<usize>,
    clock: Box<dyn Clock>,
    frame_clock: Box<dyn FrameClock>,
    graphics: Box<dyn GraphicsContext>,
    renderer: Box<dyn Renderer>,
    sound: Box<dyn SoundSystem>,
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("state", &self.state)
            .field("frame", &self.frame)
            .field("rate", &self.rate)
            .finish_non_exhaustive()
    }
}

impl FrameScheduler {
    /// `seed` makes `random` reproducible; `None` seeds from the OS.
    pub fn new(collab: Collaborators, rate: FrameRate, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: LoopState::Idle,
            frame: FrameState::default(),
            rate,
            rng,
            noise: NoiseField::new(),
            do_once: Vec::new(),
            clock: collab.clock,
            frame_clock: collab.frame_clock,
            graphics: collab.graphics,
            renderer: collab.renderer,
            sound: collab.sound,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frame_state(&self) -> FrameState {
        self.frame
    }

    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Current reading of the time source.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Scene recorded by the last tick.
    pub fn scene(&self) -> &Scene {
        self.graphics.scene()
    }

    /// Enter `Running` from frame 0 and arm the first tick.
    pub fn start(&mut self) {
        self.state = LoopState::Running;
        self.frame.reset();
        self.frame_clock.schedule_next(self.rate);
        tracing::debug!(rate = ?self.rate, "animation loop started");
    }

    /// Cancel the armed tick. The state is kept so a later `start` resumes cleanly.
    pub fn stop(&mut self) {
        self.frame_clock.cancel();
        tracing::debug!("animation loop stopped");
    }

    /// Restart the loop if it is dozing. Returns whether it woke up.
    pub fn wake(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.start();
        true
    }

    /// Block until the armed tick is due. `false` when no tick is armed.
    pub fn wait_for_tick(&mut self) -> bool {
        self.frame_clock.wait_for_tick()
    }

    fn doze(&mut self) {
        if self.state == LoopState::Running {
            tracing::debug!("no routine to run, dozing off");
        }
        self.state = LoopState::Idle;
        self.frame.reset();
        self.renderer.doze();
        self.sound.doze();
    }

    /// Run one tick.
    pub fn tick(
        &mut self,
        runner: &mut ProgramRunner,
        events: &mut EventBus,
        bookkeeping: &mut dyn Bookkeeping,
    ) -> LiveResult<TickReport> {
        if runner.active().is_some() {
            self.frame_clock.schedule_next(self.rate);
        }

        self.graphics.reset_frame();
        self.renderer.reset_frame();
        self.sound.reset_frame();

        let now = self.clock.now_ms();
        if self.frame.frame == FrameIndex::ZERO {
            self.frame.origin_ms = now;
        }
        self.frame.elapsed_ms = now - self.frame.origin_ms;

        let mut globals = FrameGlobals::new(self.frame.frame.0, self.frame.elapsed_ms);
        let outcome = runner.tick(&mut RunContext {
            graphics: self.graphics.as_mut(),
            globals: &mut globals,
            rng: &mut self.rng,
            noise: &mut self.noise,
            do_once: &mut self.do_once,
        });

        let (report, rendered) = match outcome {
            TickOutcome::Failed(failure) => {
                tracing::debug!(error = %failure, "routine failed, reverting to stable");
                events.publish(LiveEvent::RuntimeErrorThrown(failure.message.clone()));
                runner.revert_to_stable();
                return Ok(TickReport::RuntimeError(failure));
            }
            TickOutcome::Ran {
                became_stable,
                do_once,
            } => {
                if became_stable {
                    events.publish(LiveEvent::LivecodelabRunningStably);
                }
                if !do_once.is_empty() {
                    bookkeeping.do_once_executed(runner, events, &do_once);
                }
                if let Some(assigned) = globals.assigned_frame {
                    self.frame.frame = FrameIndex(assigned);
                }
                if self.frame.frame == FrameIndex::ZERO {
                    self.frame.origin_ms = now;
                }
                let rendered = self.frame.frame;
                self.frame.frame = rendered.next();
                (TickReport::Rendered(rendered), rendered)
            }
            TickOutcome::Idle => {
                self.doze();
                (TickReport::Dozed, FrameIndex::ZERO)
            }
        };

        let scene = self.graphics.scene();
        self.sound.schedule(scene.bpm, &scene.sound_cues);
        self.renderer.render(rendered, scene)?;
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
