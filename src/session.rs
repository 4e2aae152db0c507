//! The live-coding session: wires the transformer, runner, scheduler, autocoder, editor and
//! event bus together and exposes the host-facing entry points.

use crate::autocoder::{Autocoder, DEFAULT_SEED_PROGRAM};
use crate::collab::{BufferEditor, Collaborators, Editor, Scene};
use crate::demos;
use crate::foundation::core::FrameRate;
use crate::foundation::error::{LiveError, LiveResult};
use crate::runtime::{
    Bookkeeping, EventBus, FrameScheduler, LiveEvent, LoopState, ProgramRunner, SubscriptionId,
    TickReport,
};
use crate::transform::{SourceTransformer, Transformed, mark_do_once_lines};
use std::path::Path;

/// Options for a [`LiveSession`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    pub frame_rate: FrameRate,
    /// Seed for `random` in sketches and for the autocoder. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl SessionOpts {
    pub fn from_json_str(text: &str) -> LiveResult<Self> {
        serde_json::from_str(text).map_err(|e| LiveError::Other(anyhow::Error::from(e)))
    }

    pub fn from_json_file(path: &Path) -> LiveResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LiveError::Other(anyhow::Error::from(e).context(format!("read {}", path.display())))
        })?;
        Self::from_json_str(&text)
    }
}

/// What happened to a source update.
#[derive(Debug)]
pub enum SourceUpdate {
    /// Empty source: nothing runs any more.
    Cleared,
    /// A new routine is active.
    Installed,
    /// The source was rejected; the previous routine keeps running.
    Rejected(LiveError),
}

impl SourceUpdate {
    pub fn is_installed(&self) -> bool {
        matches!(self, Self::Installed)
    }
}

pub struct LiveSession {
    transformer: SourceTransformer,
    runner: ProgramRunner,
    scheduler: FrameScheduler,
    events: EventBus,
    editor: Box<dyn Editor>,
    autocoder: Autocoder,
    source: String,
}

impl std::fmt::Debug for LiveSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveSession")
            .field("scheduler", &self.scheduler)
            .field("runner", &self.runner)
            .field("autocoder", &self.autocoder.is_active())
            .field("source_len", &self.source.len())
            .finish_non_exhaustive()
    }
}

impl LiveSession {
    pub fn new(opts: SessionOpts, collab: Collaborators, editor: Box<dyn Editor>) -> LiveResult<Self> {
        // distinct streams for sketches and autocoder so one does not perturb the other
        let autocoder = Autocoder::new(opts.seed.map(|s| s.wrapping_add(1)))?;
        Ok(Self {
            transformer: SourceTransformer::default(),
            runner: ProgramRunner::new(),
            scheduler: FrameScheduler::new(collab, opts.frame_rate, opts.seed),
            events: EventBus::new(),
            editor,
            autocoder,
            source: String::new(),
        })
    }

    /// Session over headless collaborators and an in-memory editor.
    pub fn headless(opts: SessionOpts) -> LiveResult<Self> {
        Self::new(opts, Collaborators::default(), Box::new(BufferEditor::default()))
    }

    pub fn with_transformer(mut self, transformer: SourceTransformer) -> Self {
        self.transformer = transformer;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn runner(&self) -> &ProgramRunner {
        &self.runner
    }

    pub fn loop_state(&self) -> LoopState {
        self.scheduler.state()
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn scene(&self) -> &Scene {
        self.scheduler.scene()
    }

    pub fn editor_text(&self) -> String {
        self.editor.value()
    }

    pub fn autocoder_active(&self) -> bool {
        self.autocoder.is_active()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LiveEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// The single entry point for new source text.
    ///
    /// Errors are published as `compile-time-error-thrown` and reported in the return value;
    /// they never stop the loop.
    pub fn update_source(&mut self, text: &str) -> SourceUpdate {
        self.source = text.to_owned();
        if !text.is_empty() && self.scheduler.wake() {
            self.events.publish(LiveEvent::LivecodelabWakingUp);
        }
        install(&self.transformer, &mut self.runner, &mut self.events, text)
    }

    /// Put `text` in the editor and run it, as when a program is picked from a menu.
    pub fn load_program(&mut self, text: &str) -> SourceUpdate {
        self.editor.set_value(text);
        self.update_source(text)
    }

    /// Load a built-in sketch by name. `None` when no demo has that name.
    pub fn load_demo(&mut self, name: &str) -> Option<SourceUpdate> {
        let demo = demos::find(name)?;
        tracing::debug!(demo = demo.name, "loading demo");
        Some(self.load_program(demo.code))
    }

    pub fn start_loop(&mut self) {
        self.scheduler.start();
    }

    pub fn stop_loop(&mut self) {
        self.scheduler.stop();
    }

    /// Wait for the armed tick and run it. `None` when no tick is armed.
    pub fn run_frame(&mut self) -> LiveResult<Option<TickReport>> {
        if !self.scheduler.wait_for_tick() {
            return Ok(None);
        }
        let mut marker = DoOnceMarker {
            transformer: &self.transformer,
            editor: self.editor.as_mut(),
            source: &mut self.source,
        };
        let report = self
            .scheduler
            .tick(&mut self.runner, &mut self.events, &mut marker)?;
        Ok(Some(report))
    }

    /// Start or stop autocoding; `None` flips. Starting with an empty editor loads the seed
    /// program first. Returns the new state.
    pub fn toggle_autocoder(&mut self, forced: Option<bool>) -> bool {
        let on = self.autocoder.toggle(forced);
        if on && self.editor.value().is_empty() {
            self.load_program(DEFAULT_SEED_PROGRAM);
        }
        self.events.publish(LiveEvent::AutocoderButtonPressed(on));
        on
    }

    /// Mutate the editor text if the autocoder interval has elapsed. Returns whether a
    /// mutation was applied.
    pub fn poll_autocoder(&mut self) -> bool {
        let now = self.scheduler.now_ms();
        if !self.autocoder.due(now) {
            return false;
        }
        self.events.publish(LiveEvent::AutocoderbuttonFlash);
        self.autocode_now()
    }

    /// Mutate one token of the editor text right away and run the result.
    pub fn autocode_now(&mut self) -> bool {
        let text = self.editor.value();
        let Some(mutated) = self.autocoder.mutate(&text) else {
            return false;
        };
        self.editor.set_value(&mutated);
        self.update_source(&mutated);
        true
    }
}

/// Transform `text` and install the result, publishing the outcome.
fn install(
    transformer: &SourceTransformer,
    runner: &mut ProgramRunner,
    events: &mut EventBus,
    text: &str,
) -> SourceUpdate {
    match transformer.transform(text) {
        Ok(Transformed::Empty(_)) => {
            runner.clear();
            events.publish(LiveEvent::ClearError);
            SourceUpdate::Cleared
        }
        Ok(Transformed::Routine(routine)) => {
            runner.set_routine(routine);
            events.publish(LiveEvent::ClearError);
            SourceUpdate::Installed
        }
        Err(e) => {
            tracing::debug!(error = %e, "source rejected");
            events.publish(LiveEvent::CompileTimeErrorThrown(e.user_message()));
            SourceUpdate::Rejected(e)
        }
    }
}

/// Ticks executed `doOnce` headers in the source and reinstalls it.
struct DoOnceMarker<'a> {
    transformer: &'a SourceTransformer,
    editor: &'a mut dyn Editor,
    source: &'a mut String,
}

impl Bookkeeping for DoOnceMarker<'_> {
    fn do_once_executed(&mut self, runner: &mut ProgramRunner, events: &mut EventBus, lines: &[usize]) {
        let marked = mark_do_once_lines(self.source, lines);
        if marked == *self.source {
            return;
        }
        self.editor.set_value(&marked);
        events.publish(LiveEvent::CodeUpdatedByLivecodelab(marked.clone()));
        install(self.transformer, runner, events, &marked);
        *self.source = marked;
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
