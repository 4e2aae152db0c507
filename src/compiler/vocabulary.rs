//! Reserved words of the script language.
//!
//! The source rewriter and the compiler both read these tables; changing them changes the
//! compiled output of every sketch.

/// Commands executed against the graphics context, in the order they are documented.
pub const COMMANDS: &[&str] = &[
    // shapes
    "box",
    "ball",
    "peg",
    "rect",
    "line",
    // matrix
    "rotate",
    "move",
    "scale",
    "pushMatrix",
    "popMatrix",
    "resetMatrix",
    // style
    "fill",
    "noFill",
    "stroke",
    "noStroke",
    "strokeSize",
    "background",
    "simpleGradient",
    "animationStyle",
    "colorMode",
    "ballDetail",
    // lights
    "lights",
    "noLights",
    "ambientLight",
    "pointLight",
    // sound
    "bpm",
    "play",
];

/// Internal command injected by the rewriter to report an executed `doOnce`.
pub const DO_ONCE_MARKER: &str = "addDoOnce";

pub const KEYWORDS: &[&str] = &["if", "else", "repeat", "and", "or", "not", "true", "false"];

/// Names that evaluate to themselves as strings, accepted by `animationStyle`.
pub const ANIMATION_STYLES: &[&str] = &["normal", "paintOver", "motionBlur"];

/// Numeric constants.
pub const CONSTANTS: &[(&str, f64)] = &[
    ("PI", std::f64::consts::PI),
    ("TWO_PI", std::f64::consts::TAU),
    ("HALF_PI", std::f64::consts::FRAC_PI_2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Abs,
    Ceil,
    Floor,
    Round,
    Sqrt,
    Sq,
    Pow,
    Exp,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Min,
    Max,
    Constrain,
    Lerp,
    Map,
    Norm,
    Mag,
    Dist,
    Degrees,
    Radians,
    Random,
    RandomSeed,
    Noise,
    NoiseDetail,
    NoiseSeed,
    Color,
}

pub const BUILTINS: &[(&str, Builtin)] = &[
    ("abs", Builtin::Abs),
    ("ceil", Builtin::Ceil),
    ("floor", Builtin::Floor),
    ("round", Builtin::Round),
    ("sqrt", Builtin::Sqrt),
    ("sq", Builtin::Sq),
    ("pow", Builtin::Pow),
    ("exp", Builtin::Exp),
    ("log", Builtin::Log),
    ("sin", Builtin::Sin),
    ("cos", Builtin::Cos),
    ("tan", Builtin::Tan),
    ("asin", Builtin::Asin),
    ("acos", Builtin::Acos),
    ("atan", Builtin::Atan),
    ("atan2", Builtin::Atan2),
    ("min", Builtin::Min),
    ("max", Builtin::Max),
    ("constrain", Builtin::Constrain),
    ("lerp", Builtin::Lerp),
    ("map", Builtin::Map),
    ("norm", Builtin::Norm),
    ("mag", Builtin::Mag),
    ("dist", Builtin::Dist),
    ("degrees", Builtin::Degrees),
    ("radians", Builtin::Radians),
    ("random", Builtin::Random),
    ("randomSeed", Builtin::RandomSeed),
    ("noise", Builtin::Noise),
    ("noiseDetail", Builtin::NoiseDetail),
    ("noiseSeed", Builtin::NoiseSeed),
    ("color", Builtin::Color),
];

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find_map(|&(n, b)| (n == name).then_some(b))
    }

    pub fn name(self) -> &'static str {
        BUILTINS
            .iter()
            .find_map(|&(n, b)| (b == self).then_some(n))
            .unwrap_or("?")
    }
}

pub fn command_index(name: &str) -> Option<u16> {
    COMMANDS
        .iter()
        .position(|&c| c == name)
        .and_then(|i| u16::try_from(i).ok())
}

pub fn is_command(name: &str) -> bool {
    command_index(name).is_some()
}

/// Builtins called for their effect, which start a statement like commands do.
pub const SETTERS: &[&str] = &["randomSeed", "noiseDetail", "noiseSeed"];

/// Names the rewriter separates into their own statement when arguments follow.
pub fn starts_statement(name: &str) -> bool {
    is_command(name) || SETTERS.contains(&name)
}

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Identifiers that can be invoked without parentheses.
pub fn is_callable(name: &str) -> bool {
    is_command(name) || Builtin::from_name(name).is_some() || name == DO_ONCE_MARKER
}
