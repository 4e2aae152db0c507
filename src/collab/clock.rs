//! Time sources: a millisecond clock for `time`, and the frame clock that paces ticks.

use crate::foundation::core::FrameRate;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Milliseconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock moved by hand; clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Delivers ticks. At most one tick is armed at a time.
pub trait FrameClock {
    fn schedule_next(&mut self, rate: FrameRate);
    fn cancel(&mut self);
    /// Block until the armed tick is due and consume it. `false` when nothing is armed.
    fn wait_for_tick(&mut self) -> bool;
}

#[derive(Debug, Default)]
struct ManualState {
    armed: Cell<Option<FrameRate>>,
    scheduled: Cell<usize>,
    cancelled: Cell<usize>,
}

/// Fires immediately whenever a tick is armed. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct ManualFrameClock {
    state: Rc<ManualState>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed.get().is_some()
    }

    pub fn armed_rate(&self) -> Option<FrameRate> {
        self.state.armed.get()
    }

    /// Number of `schedule_next` calls so far.
    pub fn scheduled(&self) -> usize {
        self.state.scheduled.get()
    }

    pub fn cancelled(&self) -> usize {
        self.state.cancelled.get()
    }
}

impl FrameClock for ManualFrameClock {
    fn schedule_next(&mut self, rate: FrameRate) {
        self.state.armed.set(Some(rate));
        self.state.scheduled.set(self.state.scheduled.get() + 1);
    }

    fn cancel(&mut self) {
        self.state.armed.set(None);
        self.state.cancelled.set(self.state.cancelled.get() + 1);
    }

    fn wait_for_tick(&mut self) -> bool {
        self.state.armed.take().is_some()
    }
}

/// Sleeps the thread until the armed deadline.
#[derive(Debug, Default)]
pub struct PacedFrameClock {
    deadline: Option<Instant>,
    last_tick: Option<Instant>,
}

impl PacedFrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for PacedFrameClock {
    fn schedule_next(&mut self, rate: FrameRate) {
        let base = self.last_tick.unwrap_or_else(Instant::now);
        self.deadline = Some(base + rate.interval());
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn wait_for_tick(&mut self) -> bool {
        let Some(deadline) = self.deadline.take() else {
            return false;
        };
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.last_tick = Some(Instant::now());
        true
    }
}
