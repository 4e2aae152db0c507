use crate::compiler::value::Value;
use crate::compiler::vocabulary::Builtin;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConstIdx(pub(crate) u32);

/// Index of a routine-local variable. Locals start out unassigned on every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlotIdx(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Global {
    Time,
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    PushConst(ConstIdx),
    LoadSlot(SlotIdx),
    LoadGlobal(Global),

    Neg,
    Not,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,

    CallBuiltin { id: Builtin, argc: u8 },
    CallCommand { cmd: u16, argc: u8 },
    MarkDoOnce { argc: u8 },
    /// Call of a name that is neither builtin nor command; fails when executed.
    CallUnknown { name: ConstIdx, argc: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BytecodeProgram {
    pub(crate) ops: Vec<Op>,
    pub(crate) consts: Vec<Value>,
}

impl BytecodeProgram {
    pub(crate) fn new() -> Self {
        Self {
            ops: Vec::new(),
            consts: Vec::new(),
        }
    }

    pub(crate) fn push_const(&mut self, c: Value) -> ConstIdx {
        let idx = ConstIdx(self.consts.len() as u32);
        self.consts.push(c);
        idx
    }
}

/// Statement tree of a compiled routine; every expression is a separate bytecode program.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Instr {
    Eval(BytecodeProgram),
    Store {
        slot: SlotIdx,
        code: BytecodeProgram,
    },
    StoreFrame(BytecodeProgram),
    Repeat {
        count: BytecodeProgram,
        body: Vec<Instr>,
    },
    Branch {
        cond: BytecodeProgram,
        then_body: Vec<Instr>,
        else_body: Vec<Instr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Program {
    pub(crate) body: Vec<Instr>,
    pub(crate) slot_names: Vec<String>,
}
