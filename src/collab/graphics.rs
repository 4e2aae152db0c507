//! Graphics collaborator: receives drawing commands during a tick and exposes the scene.

use crate::compiler::error::RuntimeFailure;
use crate::compiler::value::{Value, colour_from_args};
use crate::foundation::core::Rgba8;
use crate::foundation::math::Mat4;
use smallvec::SmallVec;

/// One drawing command issued by a running routine.
#[derive(Debug, Clone, Copy)]
pub struct CommandCall<'a> {
    pub name: &'static str,
    pub args: &'a [Value],
    /// Elapsed time of the current frame, used by commands whose defaults animate.
    pub time_ms: f64,
}

/// Receives the commands of one tick.
pub trait GraphicsContext {
    /// Drop everything recorded for the previous tick.
    fn reset_frame(&mut self);
    fn command(&mut self, call: CommandCall<'_>) -> Result<(), RuntimeFailure>;
    fn scene(&self) -> &Scene;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Box,
    Ball,
    Peg,
    Rect,
    Line,
}

impl Shape {
    pub fn from_command(name: &str) -> Option<Self> {
        Some(match name {
            "box" => Self::Box,
            "ball" => Self::Ball,
            "peg" => Self::Peg,
            "rect" => Self::Rect,
            "line" => Self::Line,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawCall {
    pub shape: Shape,
    pub size: [f64; 3],
    pub transform: Mat4,
    pub fill: Option<Rgba8>,
    pub stroke: Option<Rgba8>,
    pub stroke_size: f64,
    /// Tessellation level; only set for balls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Backdrop {
    Solid { colour: Rgba8 },
    Gradient { colours: [Rgba8; 3] },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Light {
    Ambient { colour: Rgba8 },
    Point { colour: Rgba8, position: [f64; 3] },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    #[default]
    Normal,
    PaintOver,
    MotionBlur,
}

impl AnimationStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::Normal),
            "paintOver" => Some(Self::PaintOver),
            "motionBlur" => Some(Self::MotionBlur),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SoundCue {
    pub sound: String,
    /// Beat pattern with whitespace removed, e.g. `"x-x-"`.
    pub pattern: String,
}

/// Everything a routine asked for during one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub backdrops: Vec<Backdrop>,
    pub draws: Vec<DrawCall>,
    pub lights_enabled: bool,
    pub lights: Vec<Light>,
    pub animation_style: AnimationStyle,
    pub ball_detail: u32,
    pub bpm: Option<f64>,
    pub sound_cues: Vec<SoundCue>,
}

impl Scene {
    pub const DEFAULT_BALL_DETAIL: u32 = 8;
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            backdrops: Vec::new(),
            draws: Vec::new(),
            lights_enabled: false,
            lights: Vec::new(),
            animation_style: AnimationStyle::Normal,
            ball_detail: Self::DEFAULT_BALL_DETAIL,
            bpm: None,
            sound_cues: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Style {
    fill: Option<Rgba8>,
    stroke: Option<Rgba8>,
    stroke_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Rgba8::WHITE),
            stroke: None,
            stroke_size: 1.0,
        }
    }
}

/// Headless [`GraphicsContext`] that records commands into a [`Scene`] through a matrix stack.
#[derive(Debug, Default)]
pub struct SceneRecorder {
    scene: Scene,
    world: Mat4,
    stack: Vec<Mat4>,
    style: Style,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(&mut self, shape: Shape, args: &[f64]) {
        if self.style.fill.is_none() && self.style.stroke.is_none() {
            return;
        }
        let size = match *args {
            [] => [1.0, 1.0, 1.0],
            [a] => [a, a, a],
            [a, b] => [a, b, 1.0],
            [a, b, c, ..] => [a, b, c],
        };
        self.scene.draws.push(DrawCall {
            shape,
            size,
            transform: self.world,
            fill: self.style.fill,
            stroke: self.style.stroke,
            stroke_size: self.style.stroke_size,
            detail: (shape == Shape::Ball).then_some(self.scene.ball_detail),
        });
    }

    fn apply(&mut self, m: Mat4) {
        self.world = self.world.mul(&m);
    }
}

/// Three components from zero to three arguments: none uses `fallback`, one is spread.
fn triple(args: &[f64], fallback: [f64; 3], third: f64) -> [f64; 3] {
    match *args {
        [] => fallback,
        [a] => [a, a, a],
        [a, b] => [a, b, third],
        [a, b, c, ..] => [a, b, c],
    }
}

fn numbers(call: &CommandCall<'_>) -> Result<SmallVec<[f64; 4]>, RuntimeFailure> {
    call.args
        .iter()
        .map(|v| {
            v.as_f64()
                .map_err(|e| RuntimeFailure::new(format!("{}: {}", call.name, e.message)))
        })
        .collect()
}

fn string_arg<'v>(call: &CommandCall<'v>, i: usize) -> Result<&'v str, RuntimeFailure> {
    match call.args.get(i) {
        Some(Value::Str(s)) => Ok(s),
        Some(other) => Err(RuntimeFailure::new(format!(
            "{}: expected string, got {}",
            call.name,
            other.type_name()
        ))),
        None => Err(RuntimeFailure::new(format!(
            "{}: missing argument {}",
            call.name,
            i + 1
        ))),
    }
}

impl GraphicsContext for SceneRecorder {
    fn reset_frame(&mut self) {
        self.scene = Scene::default();
        self.world = Mat4::IDENTITY;
        self.stack.clear();
        self.style = Style::default();
    }

    fn command(&mut self, call: CommandCall<'_>) -> Result<(), RuntimeFailure> {
        let t = call.time_ms;
        if let Some(shape) = Shape::from_command(call.name) {
            let n = numbers(&call)?;
            self.draw(shape, &n);
            return Ok(());
        }

        match call.name {
            "rotate" => {
                let n = numbers(&call)?;
                let [x, y, z] = triple(&n, [t / 1000.0; 3], 0.0);
                self.apply(Mat4::rotation(x, y, z));
            }
            "move" => {
                let n = numbers(&call)?;
                let wobble = (t / 500.0).sin();
                let [x, y, z] = triple(&n, [wobble, (t / 500.0).cos(), wobble], 0.0);
                self.apply(Mat4::translation(x, y, z));
            }
            "scale" => {
                let n = numbers(&call)?;
                let pulse = 1.0 + (t / 500.0).sin() / 4.0;
                let s = triple(&n, [pulse; 3], 1.0).map(|v| {
                    if v.abs() < 1e-9 { 1e-9 } else { v }
                });
                self.apply(Mat4::scaling(s[0], s[1], s[2]));
            }
            "pushMatrix" => self.stack.push(self.world),
            "popMatrix" => self.world = self.stack.pop().unwrap_or(Mat4::IDENTITY),
            "resetMatrix" => self.world = Mat4::IDENTITY,
            "fill" => self.style.fill = Some(colour_from_args(call.args)?),
            "noFill" => self.style.fill = None,
            "stroke" => self.style.stroke = Some(colour_from_args(call.args)?),
            "noStroke" => self.style.stroke = None,
            "strokeSize" => {
                let n = numbers(&call)?;
                self.style.stroke_size = n.first().map_or(1.0, |v| v.max(0.0));
            }
            "background" => {
                let colour = colour_from_args(call.args)?;
                self.scene.backdrops.push(Backdrop::Solid { colour });
            }
            "simpleGradient" => {
                let mut colours = [Rgba8::BLACK; 3];
                for (slot, arg) in colours.iter_mut().zip(call.args) {
                    *slot = colour_from_args(std::slice::from_ref(arg))?;
                }
                self.scene.backdrops.push(Backdrop::Gradient { colours });
            }
            "animationStyle" => {
                let name = string_arg(&call, 0)?;
                self.scene.animation_style = AnimationStyle::from_name(name).ok_or_else(|| {
                    RuntimeFailure::new(format!("unknown animation style '{name}'"))
                })?;
            }
            "colorMode" => {}
            "ballDetail" => {
                let n = numbers(&call)?;
                if let Some(&d) = n.first() {
                    self.scene.ball_detail = d.clamp(2.0, 30.0).round() as u32;
                }
            }
            "lights" => self.scene.lights_enabled = true,
            "noLights" => self.scene.lights_enabled = false,
            "ambientLight" => {
                let colour = if call.args.is_empty() {
                    Rgba8::WHITE
                } else {
                    colour_from_args(call.args)?
                };
                self.scene.lights_enabled = true;
                self.scene.lights.push(Light::Ambient { colour });
            }
            "pointLight" => {
                let n = numbers(&call)?;
                let (colour, position) = match *n {
                    [r, g, b, x, y, z, ..] => (Rgba8::from_channels(r, g, b, 255.0), [x, y, z]),
                    [r, g, b, ..] => (Rgba8::from_channels(r, g, b, 255.0), [0.0; 3]),
                    _ => (Rgba8::WHITE, [0.0; 3]),
                };
                self.scene.lights_enabled = true;
                self.scene.lights.push(Light::Point { colour, position });
            }
            "bpm" => {
                let n = numbers(&call)?;
                if let Some(&b) = n.first() {
                    self.scene.bpm = Some(b.clamp(0.0, 125.0));
                }
            }
            "play" => {
                let sound = string_arg(&call, 0)?.to_owned();
                let pattern = string_arg(&call, 1)?
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                self.scene.sound_cues.push(SoundCue { sound, pattern });
            }
            other => {
                return Err(RuntimeFailure::new(format!("{other} is not a function")));
            }
        }
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/collab/graphics.rs"]
mod tests;
