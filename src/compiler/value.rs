use crate::compiler::error::RuntimeFailure;
use crate::foundation::core::Rgba8;
use std::fmt;

/// Runtime value of the script language.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Num(f64),
    Bool(bool),
    Str(String),
    Colour(Rgba8),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Num(_) => "number",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Colour(_) => "colour",
        }
    }

    pub fn as_f64(&self) -> Result<f64, RuntimeFailure> {
        match self {
            Self::Num(v) => Ok(*v),
            Self::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            other => Err(RuntimeFailure::new(format!(
                "expected number, got {}",
                other.type_name()
            ))),
        }
    }

    pub fn truthy(&self) -> bool {
        match self {
            Self::Num(v) => *v != 0.0 && !v.is_nan(),
            Self::Bool(v) => *v,
            Self::Str(s) => !s.is_empty(),
            Self::Colour(_) => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
            Self::Colour(c) => write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
        }
    }
}

/// Interpret call arguments as a colour: a colour value with optional alpha, a grey level
/// with optional alpha, or red, green, blue with optional alpha (0..=255 each).
pub fn colour_from_args(args: &[Value]) -> Result<Rgba8, RuntimeFailure> {
    match args {
        [Value::Colour(c)] => return Ok(*c),
        [Value::Colour(c), alpha] => {
            let a = Rgba8::from_channels(0.0, 0.0, 0.0, alpha.as_f64()?).a;
            return Ok(Rgba8 { a, ..*c });
        }
        _ => {}
    }
    let n = args
        .iter()
        .map(Value::as_f64)
        .collect::<Result<smallvec::SmallVec<[f64; 4]>, _>>()?;
    match n[..] {
        [g] => Ok(Rgba8::grey(g)),
        [g, a] => Ok(Rgba8::from_channels(g, g, g, a)),
        [r, g, b] => Ok(Rgba8::from_channels(r, g, b, 255.0)),
        [r, g, b, a] => Ok(Rgba8::from_channels(r, g, b, a)),
        _ => Err(RuntimeFailure::new(format!(
            "a colour takes 1 to 4 values, got {}",
            n.len()
        ))),
    }
}
