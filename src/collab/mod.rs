//! Collaborators the engine drives but does not own: editor, graphics, renderer, sound and
//! clocks. Each is a trait with a headless implementation.

pub mod clock;
pub mod editor;
pub mod graphics;
pub mod render;
pub mod sound;

pub use clock::{Clock, FrameClock, ManualClock, ManualFrameClock, PacedFrameClock, SystemClock};
pub use editor::{BufferEditor, Editor};
pub use graphics::{CommandCall, GraphicsContext, Scene, SceneRecorder};
pub use render::{InMemoryRenderer, JsonLinesRenderer, NullRenderer, Renderer};
pub use sound::{NullSound, SoundSystem};

/// The set of collaborators a session drives. `Default` is fully headless: wall clock,
/// paced frame clock, scene recorder, no renderer output and no sound.
pub struct Collaborators {
    pub clock: Box<dyn Clock>,
    pub frame_clock: Box<dyn FrameClock>,
    pub graphics: Box<dyn GraphicsContext>,
    pub renderer: Box<dyn Renderer>,
    pub sound: Box<dyn SoundSystem>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock::new()),
            frame_clock: Box::new(PacedFrameClock::new()),
            graphics: Box::new(SceneRecorder::new()),
            renderer: Box::new(NullRenderer),
            sound: Box::new(NullSound),
        }
    }
}

impl Collaborators {
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_frame_clock(mut self, frame_clock: impl FrameClock + 'static) -> Self {
        self.frame_clock = Box::new(frame_clock);
        self
    }

    pub fn with_graphics(mut self, graphics: impl GraphicsContext + 'static) -> Self {
        self.graphics = Box::new(graphics);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_sound(mut self, sound: impl SoundSystem + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }
}
