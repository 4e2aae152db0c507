//! The live loop: program runner with stable fallback, frame scheduler and event bus.

pub mod events;
pub mod runner;
pub mod scheduler;

pub use events::{EventBus, LiveEvent, SubscriptionId};
pub use runner::{ProgramRunner, STABILITY_THRESHOLD, TickOutcome};
pub use scheduler::{Bookkeeping, FrameScheduler, FrameState, LoopState, NoBookkeeping, TickReport};
