use crate::collab::graphics::SoundCue;

/// Sound collaborator: receives the tempo and the beat patterns requested by a tick.
pub trait SoundSystem {
    fn reset_frame(&mut self) {}
    fn schedule(&mut self, bpm: Option<f64>, cues: &[SoundCue]);
    fn doze(&mut self) {}
}

/// Stays silent.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSound;

impl SoundSystem for NullSound {
    fn schedule(&mut self, bpm: Option<f64>, cues: &[SoundCue]) {
        if !cues.is_empty() {
            tracing::trace!(?bpm, cues = cues.len(), "sound cues dropped");
        }
    }
}
