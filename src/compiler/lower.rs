use crate::compiler::ast::{AssignOp, BinaryOp, Expr, Lit, Stmt, UnaryOp};
use crate::compiler::bytecode::{BytecodeProgram, Global, Instr, Op, Program, SlotIdx};
use crate::compiler::error::CompileError;
use crate::compiler::value::Value;
use crate::compiler::vocabulary::{self, Builtin};
use crate::foundation::palette;
use std::collections::{BTreeSet, HashMap};

/// Resolve identifiers and lower every expression of `stmts` to bytecode.
///
/// Names assigned anywhere in the program are locals and shadow globals and constants.
pub(crate) fn lower_program(src: &str, stmts: &[Stmt]) -> Result<Program, CompileError> {
    let mut assigned = BTreeSet::new();
    collect_assigned(stmts, &mut assigned);

    let mut lw = Lowerer {
        src,
        assigned,
        slots: HashMap::new(),
        slot_names: Vec::new(),
    };
    let body = lw.lower_block(stmts)?;
    Ok(Program {
        body,
        slot_names: lw.slot_names,
    })
}

fn collect_assigned(stmts: &[Stmt], out: &mut BTreeSet<String>) {
    for stmt in stmts {
        match stmt {
            Stmt::Assign { target, .. } if target != "frame" => {
                out.insert(target.clone());
            }
            Stmt::Repeat { body, .. } => collect_assigned(body, out),
            Stmt::If {
                then_body,
                else_body,
                ..
            } => {
                collect_assigned(then_body, out);
                if let Some(else_body) = else_body {
                    collect_assigned(else_body, out);
                }
            }
            _ => {}
        }
    }
}

struct Lowerer<'a> {
    src: &'a str,
    assigned: BTreeSet<String>,
    slots: HashMap<String, SlotIdx>,
    slot_names: Vec<String>,
}

impl Lowerer<'_> {
    fn slot(&mut self, name: &str) -> SlotIdx {
        if let Some(&idx) = self.slots.get(name) {
            return idx;
        }
        let idx = SlotIdx(self.slot_names.len() as u32);
        self.slot_names.push(name.to_owned());
        self.slots.insert(name.to_owned(), idx);
        idx
    }

    fn lower_block(&mut self, stmts: &[Stmt]) -> Result<Vec<Instr>, CompileError> {
        stmts.iter().map(|s| self.lower_stmt(s)).collect()
    }

    fn lower_stmt(&mut self, stmt: &Stmt) -> Result<Instr, CompileError> {
        Ok(match stmt {
            Stmt::Expr(e) => Instr::Eval(self.lower_expr(e)?),
            Stmt::Assign {
                target,
                op,
                value,
                offset,
            } => {
                if target == "time" {
                    return Err(CompileError::at(
                        self.src,
                        *offset,
                        "cannot assign to 'time'",
                    ));
                }
                let mut code = BytecodeProgram::new();
                let combine = match op {
                    AssignOp::Set => None,
                    AssignOp::Add => Some(Op::Add),
                    AssignOp::Sub => Some(Op::Sub),
                    AssignOp::Mul => Some(Op::Mul),
                    AssignOp::Div => Some(Op::Div),
                };
                if target == "frame" {
                    if combine.is_some() {
                        code.ops.push(Op::LoadGlobal(Global::Frame));
                    }
                    self.emit(&mut code, value)?;
                    code.ops.extend(combine);
                    Instr::StoreFrame(code)
                } else {
                    let slot = self.slot(target);
                    if combine.is_some() {
                        code.ops.push(Op::LoadSlot(slot));
                    }
                    self.emit(&mut code, value)?;
                    code.ops.extend(combine);
                    Instr::Store { slot, code }
                }
            }
            Stmt::Repeat { count, body } => Instr::Repeat {
                count: self.lower_expr(count)?,
                body: self.lower_block(body)?,
            },
            Stmt::If {
                cond,
                then_body,
                else_body,
            } => Instr::Branch {
                cond: self.lower_expr(cond)?,
                then_body: self.lower_block(then_body)?,
                else_body: match else_body {
                    Some(b) => self.lower_block(b)?,
                    None => Vec::new(),
                },
            },
        })
    }

    fn lower_expr(&mut self, e: &Expr) -> Result<BytecodeProgram, CompileError> {
        let mut code = BytecodeProgram::new();
        self.emit(&mut code, e)?;
        Ok(code)
    }

    fn emit(&mut self, code: &mut BytecodeProgram, e: &Expr) -> Result<(), CompileError> {
        match e {
            Expr::Lit(lit) => {
                let v = match lit {
                    Lit::Num(v) => Value::Num(*v),
                    Lit::Bool(v) => Value::Bool(*v),
                    Lit::Str(s) => Value::Str(s.clone()),
                };
                let idx = code.push_const(v);
                code.ops.push(Op::PushConst(idx));
            }
            Expr::Ident { name, .. } => self.emit_ident(code, name),
            Expr::Unary { op, expr } => {
                self.emit(code, expr)?;
                code.ops.push(match op {
                    UnaryOp::Neg => Op::Neg,
                    UnaryOp::Not => Op::Not,
                });
            }
            Expr::Binary { op, left, right } => {
                self.emit(code, left)?;
                self.emit(code, right)?;
                code.ops.push(match op {
                    BinaryOp::Add => Op::Add,
                    BinaryOp::Sub => Op::Sub,
                    BinaryOp::Mul => Op::Mul,
                    BinaryOp::Div => Op::Div,
                    BinaryOp::Mod => Op::Mod,
                    BinaryOp::Eq => Op::Eq,
                    BinaryOp::Ne => Op::Ne,
                    BinaryOp::Lt => Op::Lt,
                    BinaryOp::Le => Op::Le,
                    BinaryOp::Gt => Op::Gt,
                    BinaryOp::Ge => Op::Ge,
                    BinaryOp::And => Op::And,
                    BinaryOp::Or => Op::Or,
                });
            }
            Expr::Call { func, args, offset } => {
                for a in args {
                    self.emit(code, a)?;
                }
                let argc = u8::try_from(args.len()).map_err(|_| {
                    CompileError::at(self.src, *offset, format!("too many arguments to '{func}'"))
                })?;
                self.emit_call(code, func, argc);
            }
        }
        Ok(())
    }

    fn emit_ident(&mut self, code: &mut BytecodeProgram, name: &str) {
        if self.assigned.contains(name) {
            let slot = self.slot(name);
            code.ops.push(Op::LoadSlot(slot));
            return;
        }
        match name {
            "time" => {
                code.ops.push(Op::LoadGlobal(Global::Time));
                return;
            }
            "frame" => {
                code.ops.push(Op::LoadGlobal(Global::Frame));
                return;
            }
            _ => {}
        }

        let constant = vocabulary::CONSTANTS
            .iter()
            .find_map(|&(n, v)| (n == name).then_some(Value::Num(v)))
            .or_else(|| palette::lookup(name).map(Value::Colour))
            .or_else(|| {
                vocabulary::ANIMATION_STYLES
                    .contains(&name)
                    .then(|| Value::Str(name.to_owned()))
            });
        if let Some(v) = constant {
            let idx = code.push_const(v);
            code.ops.push(Op::PushConst(idx));
            return;
        }

        if vocabulary::is_callable(name) {
            self.emit_call(code, name, 0);
            return;
        }

        let slot = self.slot(name);
        code.ops.push(Op::LoadSlot(slot));
    }

    fn emit_call(&mut self, code: &mut BytecodeProgram, func: &str, argc: u8) {
        let op = if self.assigned.contains(func) {
            None
        } else if let Some(id) = Builtin::from_name(func) {
            Some(Op::CallBuiltin { id, argc })
        } else if let Some(cmd) = vocabulary::command_index(func) {
            Some(Op::CallCommand { cmd, argc })
        } else if func == vocabulary::DO_ONCE_MARKER {
            Some(Op::MarkDoOnce { argc })
        } else {
            None
        };
        let op = op.unwrap_or_else(|| {
            let name = code.push_const(Value::Str(func.to_owned()));
            Op::CallUnknown { name, argc }
        });
        code.ops.push(op);
    }
}
