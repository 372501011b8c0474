use num_derive::FromPrimitive;
use strum_macros::{EnumIter, EnumString};

/// Instruction formats. All three encode to a 20-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    R,
    I,
    J,
}

/// The instruction set. Discriminants are the 4-bit opcodes and cover
/// the full nibble range, so any opcode field decodes to exactly one
/// mnemonic.
#[derive(FromPrimitive, EnumString, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Opcode {
    Sw = 0b0000,
    And = 0b0001,
    Andi = 0b0010,
    J = 0b0011,
    Nor = 0b0100,
    Or = 0b0101,
    Sll = 0b0110,
    Lw = 0b0111,
    Subi = 0b1000,
    Add = 0b1001,
    Ori = 0b1010,
    Srl = 0b1011,
    Beq = 0b1100,
    Sub = 0b1101,
    Addi = 0b1110,
    Bneq = 0b1111,
}

impl Opcode {
    pub fn format(self) -> Format {
        match self {
            Opcode::Add
            | Opcode::Sub
            | Opcode::And
            | Opcode::Or
            | Opcode::Nor
            | Opcode::Sll
            | Opcode::Srl => Format::R,
            Opcode::J => Format::J,
            _ => Format::I,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_branch(self) -> bool {
        matches!(self, Opcode::Beq | Opcode::Bneq)
    }

    pub fn is_jump(self) -> bool {
        self == Opcode::J
    }

    pub fn is_shift(self) -> bool {
        matches!(self, Opcode::Sll | Opcode::Srl)
    }

    pub fn is_load_store(self) -> bool {
        matches!(self, Opcode::Lw | Opcode::Sw)
    }
}
