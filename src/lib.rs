//! Livecode is a live-coding runtime for small visual sketches.
//!
//! Source text goes through a chain of line-preserving rewrites, is compiled into a routine
//! and run once per animation frame against a scene recorder. The public API is
//! session-oriented:
//!
//! - Create a [`LiveSession`] over a set of [`Collaborators`]
//! - Feed it source with [`LiveSession::update_source`]
//! - Drive frames with [`LiveSession::run_frame`] and watch the [`LiveEvent`]s it publishes
#![forbid(unsafe_code)]

pub mod autocoder;
pub mod collab;
pub mod compiler;
pub mod demos;
pub mod foundation;
pub mod lexer;
pub mod runtime;
pub mod session;
pub mod transform;

pub use crate::autocoder::{AUTOCODER_INTERVAL_MS, Autocoder, DEFAULT_SEED_PROGRAM};
pub use crate::collab::{
    BufferEditor, Collaborators, Editor, InMemoryRenderer, JsonLinesRenderer, ManualClock,
    ManualFrameClock, PacedFrameClock, Renderer, Scene, SceneRecorder,
};
pub use crate::compiler::{CompiledRoutine, Compiler, ScriptCompiler};
pub use crate::foundation::core::{FrameIndex, FrameRate, Rgba8};
pub use crate::foundation::error::{LiveError, LiveResult};
pub use crate::runtime::{LiveEvent, LoopState, STABILITY_THRESHOLD, TickReport};
pub use crate::session::{LiveSession, SessionOpts, SourceUpdate};
pub use crate::transform::{SourceTransformer, Transformed, transform_source};
