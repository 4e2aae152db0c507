//! Renderer collaborator: consumes the scene recorded during a tick.

use crate::collab::graphics::Scene;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LiveError, LiveResult};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

pub trait Renderer {
    fn reset_frame(&mut self) {}
    fn render(&mut self, frame: FrameIndex, scene: &Scene) -> LiveResult<()>;
    /// The loop went idle; release anything held for animation.
    fn doze(&mut self) {}
}

/// Discards every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: FrameIndex, _scene: &Scene) -> LiveResult<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RenderLog {
    pub frames: Vec<(FrameIndex, Scene)>,
    pub resets: usize,
    pub dozes: usize,
}

/// Keeps every rendered scene. Clones share the same log so a test can keep a handle
/// after moving the renderer into a session.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRenderer {
    log: Rc<RefCell<RenderLog>>,
}

impl InMemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_count(&self) -> usize {
        self.log.borrow().frames.len()
    }

    pub fn last(&self) -> Option<(FrameIndex, Scene)> {
        self.log.borrow().frames.last().cloned()
    }

    pub fn frames(&self) -> Vec<FrameIndex> {
        self.log.borrow().frames.iter().map(|(f, _)| *f).collect()
    }

    pub fn resets(&self) -> usize {
        self.log.borrow().resets
    }

    pub fn dozes(&self) -> usize {
        self.log.borrow().dozes
    }
}

impl Renderer for InMemoryRenderer {
    fn reset_frame(&mut self) {
        self.log.borrow_mut().resets += 1;
    }

    fn render(&mut self, frame: FrameIndex, scene: &Scene) -> LiveResult<()> {
        self.log.borrow_mut().frames.push((frame, scene.clone()));
        Ok(())
    }

    fn doze(&mut self) {
        self.log.borrow_mut().dozes += 1;
    }
}

#[derive(serde::Serialize)]
struct SceneLine<'a> {
    frame: u64,
    #[serde(flatten)]
    scene: &'a Scene,
}

/// Writes one JSON object per rendered frame.
#[derive(Debug)]
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn render(&mut self, frame: FrameIndex, scene: &Scene) -> LiveResult<()> {
        let line = SceneLine {
            frame: frame.0,
            scene,
        };
        serde_json::to_writer(&mut self.out, &line)
            .map_err(|e| LiveError::Other(anyhow::Error::from(e)))?;
        writeln!(self.out).map_err(|e| LiveError::Other(anyhow::Error::from(e)))?;
        Ok(())
    }

    fn doze(&mut self) {
        if let Err(e) = self.out.flush() {
            tracing::warn!(error = %e, "flushing scene output failed");
        }
    }
}
