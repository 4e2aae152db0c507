use std::time::Duration;

/// Absolute 0-based frame index of the animation loop.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    pub const ZERO: Self = Self(0);

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// How often the frame clock delivers ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameRate {
    /// Tick as soon as the host allows (display refresh in a browser, ~60 Hz headless).
    #[default]
    AsFastAsPossible,
    /// Tick at a fixed number of frames per second.
    Fixed(u32),
}

impl FrameRate {
    /// Refresh interval used when pacing "as fast as possible" without a display.
    pub const FALLBACK_FPS: u32 = 60;

    /// Wall-clock spacing between two ticks.
    pub fn interval(self) -> Duration {
        let fps = match self {
            Self::AsFastAsPossible => Self::FALLBACK_FPS,
            Self::Fixed(fps) => fps.max(1),
        };
        Duration::from_secs_f64(1.0 / f64::from(fps))
    }
}

/// Straight-alpha RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a colour from script numbers, clamping each channel into `0..=255`.
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn ch(v: f64) -> u8 {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, 255.0) as u8
            }
        }
        Self::rgba(ch(r), ch(g), ch(b), ch(a))
    }

    /// Grey level, as produced by the one-argument form of `fill 128`.
    pub fn grey(v: f64) -> Self {
        Self::from_channels(v, v, v, 255.0)
    }
}
