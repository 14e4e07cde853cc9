//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** The five ALU operations shared by register ops and jumps.
//! 2. **Operand Selection:** Sources for the two ALU inputs (registers, PC, or immediate).
//! 3. **Write Control:** Whether the instruction commits a register and whether it redirects the PC.

use crate::isa::instruction::Instruction;
use crate::isa::opcodes;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition. Also computes jump targets.
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,
}

impl AluOp {
    /// All operations, in opcode order.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Xor, Self::And, Self::Or];

    /// Maps a register-op opcode to its ALU operation.
    pub const fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            opcodes::OP_ADD => Some(Self::Add),
            opcodes::OP_SUB => Some(Self::Sub),
            opcodes::OP_XOR => Some(Self::Xor),
            opcodes::OP_AND => Some(Self::And),
            opcodes::OP_OR => Some(Self::Or),
            _ => None,
        }
    }

    /// The opcode that selects this operation.
    pub const fn opcode(self) -> u8 {
        match self {
            Self::Add => opcodes::OP_ADD,
            Self::Sub => opcodes::OP_SUB,
            Self::Xor => opcodes::OP_XOR,
            Self::And => opcodes::OP_AND,
            Self::Or => opcodes::OP_OR,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Xor => "XOR",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Value of `rs1` (register file or bypass).
    #[default]
    Reg1,
    /// Fetch-time PC of the instruction itself.
    Pc,
    /// Constant zero; no register is read.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Value of `rs2` (register file or bypass).
    #[default]
    Reg2,
    /// Sign-extended immediate.
    Imm,
    /// Constant zero; no register is read.
    Zero,
}

/// Control signals derived from a decoded instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operation; forced to `Add` for jumps.
    pub alu: AluOp,
    /// Operand A source.
    pub a_src: OpASrc,
    /// Operand B source.
    pub b_src: OpBSrc,
    /// Instruction writes `rd`.
    pub reg_write: bool,
    /// Instruction is an unconditional branch.
    pub is_branch: bool,
}

impl ControlSignals {
    /// Derives the control signals for `inst`.
    ///
    /// A `NOP` reads no registers and clears `reg_write`, so it flows through
    /// Execute without any side effect.
    pub const fn for_instruction(inst: &Instruction) -> Self {
        match *inst {
            Instruction::Nop => Self {
                alu: AluOp::Add,
                a_src: OpASrc::Zero,
                b_src: OpBSrc::Zero,
                reg_write: false,
                is_branch: false,
            },
            Instruction::RegOp { op, .. } => Self {
                alu: op,
                a_src: OpASrc::Reg1,
                b_src: OpBSrc::Reg2,
                reg_write: true,
                is_branch: false,
            },
            Instruction::Jump { .. } => Self {
                alu: AluOp::Add,
                a_src: OpASrc::Pc,
                b_src: OpBSrc::Imm,
                reg_write: false,
                is_branch: true,
            },
        }
    }
}
