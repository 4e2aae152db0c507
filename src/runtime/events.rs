use std::fmt;

/// Notifications published to the host while the engine runs.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "kebab-case")]
pub enum LiveEvent {
    CompileTimeErrorThrown(String),
    RuntimeErrorThrown(String),
    /// The active routine survived enough frames to become the fallback.
    LivecodelabRunningStably,
    /// The engine rewrote the editor text (doOnce ticks); carries the new text.
    CodeUpdatedByLivecodelab(String),
    LivecodelabWakingUp,
    ClearError,
    AutocoderButtonPressed(bool),
    AutocoderbuttonFlash,
}

impl LiveEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CompileTimeErrorThrown(_) => "compile-time-error-thrown",
            Self::RuntimeErrorThrown(_) => "runtime-error-thrown",
            Self::LivecodelabRunningStably => "livecodelab-running-stably",
            Self::CodeUpdatedByLivecodelab(_) => "code-updated-by-livecodelab",
            Self::LivecodelabWakingUp => "livecodelab-waking-up",
            Self::ClearError => "clear-error",
            Self::AutocoderButtonPressed(_) => "autocoder-button-pressed",
            Self::AutocoderbuttonFlash => "autocoderbutton-flash",
        }
    }
}

impl fmt::Display for LiveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompileTimeErrorThrown(m) | Self::RuntimeErrorThrown(m) => {
                write!(f, "{}: {m}", self.name())
            }
            Self::AutocoderButtonPressed(on) => write!(f, "{}: {on}", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&LiveEvent)>;

/// Synchronous publish/subscribe. Handlers run in subscription order on the publishing thread.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&LiveEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    pub fn publish(&mut self, event: LiveEvent) {
        tracing::debug!(event = %event, "publish");
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
    }
}
