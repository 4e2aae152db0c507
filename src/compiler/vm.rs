use crate::collab::graphics::CommandCall;
use crate::compiler::bytecode::{BytecodeProgram, Global, Instr, Op, Program};
use crate::compiler::error::RuntimeFailure;
use crate::compiler::routine::RunContext;
use crate::compiler::value::{Value, colour_from_args};
use crate::compiler::vocabulary::{self, Builtin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

type Args = SmallVec<[Value; 4]>;

struct Locals<'p> {
    names: &'p [String],
    slots: Vec<Option<Value>>,
    stack: Vec<Value>,
}

pub(crate) fn run(program: &Program, ctx: &mut RunContext<'_>) -> Result<(), RuntimeFailure> {
    let mut locals = Locals {
        names: &program.slot_names,
        slots: vec![None; program.slot_names.len()],
        stack: Vec::with_capacity(16),
    };
    exec_block(&program.body, &mut locals, ctx)
}

fn exec_block(
    body: &[Instr],
    locals: &mut Locals<'_>,
    ctx: &mut RunContext<'_>,
) -> Result<(), RuntimeFailure> {
    for instr in body {
        match instr {
            Instr::Eval(code) => {
                eval(code, locals, ctx)?;
            }
            Instr::Store { slot, code } => {
                let v = eval(code, locals, ctx)?;
                let cell = locals
                    .slots
                    .get_mut(slot.0 as usize)
                    .ok_or_else(|| RuntimeFailure::new("local slot out of range"))?;
                *cell = Some(v);
            }
            Instr::StoreFrame(code) => {
                let v = eval(code, locals, ctx)?.as_f64()?;
                ctx.globals.assigned_frame = Some(to_count(v));
            }
            Instr::Repeat { count, body } => {
                let n = to_count(eval(count, locals, ctx)?.as_f64()?);
                for _ in 0..n {
                    exec_block(body, locals, ctx)?;
                }
            }
            Instr::Branch {
                cond,
                then_body,
                else_body,
            } => {
                if eval(cond, locals, ctx)?.truthy() {
                    exec_block(then_body, locals, ctx)?;
                } else {
                    exec_block(else_body, locals, ctx)?;
                }
            }
        }
    }
    Ok(())
}

/// Seeds are the integer part of the script value; negative seeds wrap.
fn seed_of(v: f64) -> u64 {
    if v.is_finite() { v.trunc() as i64 as u64 } else { 0 }
}

fn octave_count(v: f64) -> u32 {
    u32::try_from(to_count(v)).unwrap_or(u32::MAX)
}

/// Non-finite and negative counts run zero times.
fn to_count(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        v.floor() as u64
    } else {
        0
    }
}

fn eval(
    p: &BytecodeProgram,
    locals: &mut Locals<'_>,
    ctx: &mut RunContext<'_>,
) -> Result<Value, RuntimeFailure> {
    let mut stack = std::mem::take(&mut locals.stack);
    stack.clear();
    let res = eval_with_stack(p, locals, ctx, &mut stack);
    locals.stack = stack;
    res
}

fn eval_with_stack(
    p: &BytecodeProgram,
    locals: &Locals<'_>,
    ctx: &mut RunContext<'_>,
    stack: &mut Vec<Value>,
) -> Result<Value, RuntimeFailure> {
    for &op in &p.ops {
        match op {
            Op::PushConst(idx) => {
                let c = p
                    .consts
                    .get(idx.0 as usize)
                    .ok_or_else(|| RuntimeFailure::new("const idx out of range"))?;
                stack.push(c.clone());
            }
            Op::LoadSlot(slot) => {
                let i = slot.0 as usize;
                match locals.slots.get(i).and_then(Option::as_ref) {
                    Some(v) => stack.push(v.clone()),
                    None => {
                        let name = locals.names.get(i).map_or("variable", String::as_str);
                        return Err(RuntimeFailure::new(format!("{name} is not defined")));
                    }
                }
            }
            Op::LoadGlobal(Global::Time) => stack.push(Value::Num(ctx.globals.time_ms)),
            Op::LoadGlobal(Global::Frame) => {
                stack.push(Value::Num(ctx.globals.current_frame() as f64));
            }

            Op::Neg => {
                let v = pop(stack)?.as_f64()?;
                stack.push(Value::Num(-v));
            }
            Op::Not => {
                let v = pop(stack)?.truthy();
                stack.push(Value::Bool(!v));
            }
            Op::Add => {
                let b = pop(stack)?;
                let a = pop(stack)?;
                stack.push(match (a, b) {
                    (Value::Str(a), b) => Value::Str(format!("{a}{b}")),
                    (a, Value::Str(b)) => Value::Str(format!("{a}{b}")),
                    (a, b) => Value::Num(a.as_f64()? + b.as_f64()?),
                });
            }
            Op::Sub => bin_numeric(stack, |a, b| a - b)?,
            Op::Mul => bin_numeric(stack, |a, b| a * b)?,
            Op::Div => bin_numeric(stack, |a, b| a / b)?,
            Op::Mod => bin_numeric(stack, |a, b| a % b)?,

            Op::Eq => bin_eq(stack, true)?,
            Op::Ne => bin_eq(stack, false)?,
            Op::Lt => bin_cmp(stack, |a, b| a < b)?,
            Op::Le => bin_cmp(stack, |a, b| a <= b)?,
            Op::Gt => bin_cmp(stack, |a, b| a > b)?,
            Op::Ge => bin_cmp(stack, |a, b| a >= b)?,

            Op::And => {
                let b = pop(stack)?.truthy();
                let a = pop(stack)?.truthy();
                stack.push(Value::Bool(a && b));
            }
            Op::Or => {
                let b = pop(stack)?.truthy();
                let a = pop(stack)?.truthy();
                stack.push(Value::Bool(a || b));
            }

            Op::CallBuiltin { id, argc } => {
                let args = pop_args(stack, argc)?;
                let v = call_builtin(id, &args, ctx)?;
                stack.push(v);
            }
            Op::CallCommand { cmd, argc } => {
                let args = pop_args(stack, argc)?;
                let name = vocabulary::COMMANDS
                    .get(usize::from(cmd))
                    .copied()
                    .ok_or_else(|| RuntimeFailure::new("command idx out of range"))?;
                ctx.graphics.command(CommandCall {
                    name,
                    args: &args,
                    time_ms: ctx.globals.time_ms,
                })?;
                stack.push(Value::Num(0.0));
            }
            Op::MarkDoOnce { argc } => {
                let args = pop_args(stack, argc)?;
                let line = args
                    .first()
                    .map(Value::as_f64)
                    .transpose()?
                    .ok_or_else(|| RuntimeFailure::new("addDoOnce expects a line number"))?;
                ctx.do_once.push(to_count(line) as usize);
                stack.push(Value::Num(0.0));
            }
            Op::CallUnknown { name, .. } => {
                let name = p
                    .consts
                    .get(name.0 as usize)
                    .map_or_else(|| "function".to_owned(), Value::to_string);
                return Err(RuntimeFailure::new(format!("{name} is not a function")));
            }
        }
    }

    if stack.len() != 1 {
        return Err(RuntimeFailure::new(format!(
            "stack has {} values at end of expression",
            stack.len()
        )));
    }
    pop(stack)
}

fn pop(stack: &mut Vec<Value>) -> Result<Value, RuntimeFailure> {
    stack
        .pop()
        .ok_or_else(|| RuntimeFailure::new("stack underflow"))
}

fn pop_args(stack: &mut Vec<Value>, argc: u8) -> Result<Args, RuntimeFailure> {
    let argc = usize::from(argc);
    if stack.len() < argc {
        return Err(RuntimeFailure::new("stack underflow in call"));
    }
    let at = stack.len() - argc;
    Ok(stack.drain(at..).collect())
}

fn bin_numeric(
    stack: &mut Vec<Value>,
    f: impl FnOnce(f64, f64) -> f64,
) -> Result<(), RuntimeFailure> {
    let b = pop(stack)?.as_f64()?;
    let a = pop(stack)?.as_f64()?;
    stack.push(Value::Num(f(a, b)));
    Ok(())
}

fn bin_cmp(
    stack: &mut Vec<Value>,
    f: impl FnOnce(f64, f64) -> bool,
) -> Result<(), RuntimeFailure> {
    let b = pop(stack)?.as_f64()?;
    let a = pop(stack)?.as_f64()?;
    stack.push(Value::Bool(f(a, b)));
    Ok(())
}

fn bin_eq(stack: &mut Vec<Value>, is_eq: bool) -> Result<(), RuntimeFailure> {
    let b = pop(stack)?;
    let a = pop(stack)?;
    let res = match (&a, &b) {
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Colour(x), Value::Colour(y)) => x == y,
        (Value::Num(_) | Value::Bool(_), Value::Num(_) | Value::Bool(_)) => {
            a.as_f64()? == b.as_f64()?
        }
        _ => false,
    };
    stack.push(Value::Bool(res == is_eq));
    Ok(())
}

fn call_builtin(
    id: Builtin,
    args: &[Value],
    ctx: &mut RunContext<'_>,
) -> Result<Value, RuntimeFailure> {
    use Builtin as B;

    if id == B::Color {
        return colour_from_args(args).map(Value::Colour);
    }

    let x = args
        .iter()
        .map(Value::as_f64)
        .collect::<Result<SmallVec<[f64; 6]>, _>>()?;
    let v = match (id, &x[..]) {
        (B::RandomSeed, &[seed]) => {
            *ctx.rng = StdRng::seed_from_u64(seed_of(seed));
            0.0
        }
        (B::NoiseSeed, &[seed]) => {
            ctx.noise.reseed(seed_of(seed));
            0.0
        }
        (B::NoiseDetail, &[octaves]) => {
            ctx.noise.set_detail(octave_count(octaves), None);
            0.0
        }
        (B::NoiseDetail, &[octaves, falloff]) => {
            ctx.noise.set_detail(octave_count(octaves), Some(falloff));
            0.0
        }
        (B::Noise, coords @ [_, ..]) if coords.len() <= 3 => ctx
            .noise
            .sample(coords, ctx.rng)
            .ok_or_else(|| RuntimeFailure::new("noise takes 1 to 3 coordinates"))?,
        (B::Abs, &[a]) => a.abs(),
        (B::Ceil, &[a]) => a.ceil(),
        (B::Floor, &[a]) => a.floor(),
        (B::Round, &[a]) => a.round(),
        (B::Sqrt, &[a]) => a.sqrt(),
        (B::Sq, &[a]) => a * a,
        (B::Pow, &[a, b]) => a.powf(b),
        (B::Exp, &[a]) => a.exp(),
        (B::Log, &[a]) => a.ln(),
        (B::Sin, &[a]) => a.sin(),
        (B::Cos, &[a]) => a.cos(),
        (B::Tan, &[a]) => a.tan(),
        (B::Asin, &[a]) => a.asin(),
        (B::Acos, &[a]) => a.acos(),
        (B::Atan, &[a]) => a.atan(),
        (B::Atan2, &[y, x]) => y.atan2(x),
        (B::Min, &[first, ref rest @ ..]) => rest.iter().fold(first, |m, &v| m.min(v)),
        (B::Max, &[first, ref rest @ ..]) => rest.iter().fold(first, |m, &v| m.max(v)),
        (B::Constrain, &[v, lo, hi]) => v.max(lo).min(hi),
        (B::Lerp, &[a, b, t]) => a + (b - a) * t,
        (B::Map, &[v, lo1, hi1, lo2, hi2]) => lo2 + (hi2 - lo2) * ((v - lo1) / (hi1 - lo1)),
        (B::Norm, &[v, lo, hi]) => (v - lo) / (hi - lo),
        (B::Mag, &[a, b]) => a.hypot(b),
        (B::Mag, &[a, b, c]) => (a * a + b * b + c * c).sqrt(),
        (B::Dist, &[x1, y1, x2, y2]) => (x2 - x1).hypot(y2 - y1),
        (B::Dist, &[x1, y1, z1, x2, y2, z2]) => {
            ((x2 - x1).powi(2) + (y2 - y1).powi(2) + (z2 - z1).powi(2)).sqrt()
        }
        (B::Degrees, &[a]) => a.to_degrees(),
        (B::Radians, &[a]) => a.to_radians(),
        (B::Random, &[]) => ctx.rng.gen_range(0.0..1.0),
        (B::Random, &[hi]) => ctx.rng.gen_range(0.0..1.0) * hi,
        (B::Random, &[lo, hi]) => lo + ctx.rng.gen_range(0.0..1.0) * (hi - lo),
        _ => {
            return Err(RuntimeFailure::new(format!(
                "wrong number of arguments to {}: {}",
                id.name(),
                x.len()
            )));
        }
    };
    Ok(Value::Num(v))
}
