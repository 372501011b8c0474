use std::fmt::Display;

use num_traits::FromPrimitive;

use crate::op::Opcode;
use crate::register::Register;

/// A 20-bit instruction word. The three formats share the opcode nibble
/// in the top four bits:
/// ______________________________________________
/// | op |  rs  |  rt  |  rd  | shamt |   R-type
/// | op |  rs  |  rt  |   immediate  |   I-type
/// | op |    target   |     zero     |   J-type
/// ----------------------------------------------
/// Signed fields arrive as i32 and are truncated to field width by
/// masking, which is the two's-complement encoding for negatives. There
/// is no range checking; out-of-range values truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word(u32);

/// Truncate a signed value to an unsigned field of the given bit width.
pub fn field(value: i32, width: u32) -> u32 {
    (value as u32) & ((1 << width) - 1)
}

impl Word {
    pub fn r_type(opcode: Opcode, rs: Register, rt: Register, rd: Register, shamt: i32) -> Self {
        Word(opcode.code() << 16 | rs.code() << 12 | rt.code() << 8 | rd.code() << 4 | field(shamt, 4))
    }

    pub fn i_type(opcode: Opcode, rs: Register, rt: Register, immediate: i32) -> Self {
        Word(opcode.code() << 16 | rs.code() << 12 | rt.code() << 8 | field(immediate, 8))
    }

    pub fn j_type(opcode: Opcode, target: i32) -> Self {
        Word(opcode.code() << 16 | field(target, 8) << 8)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn opcode(self) -> Option<Opcode> {
        Opcode::from_u32(self.0 >> 16)
    }

    pub fn rs(self) -> u8 {
        ((self.0 >> 12) & 0xF) as u8
    }

    pub fn rt(self) -> u8 {
        ((self.0 >> 8) & 0xF) as u8
    }

    pub fn rd(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    pub fn shamt(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// The I-type immediate, sign-extended back to i32.
    pub fn immediate(self) -> i32 {
        (self.0 & 0xFF) as u8 as i8 as i32
    }

    pub fn target(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:05x}", self.0)
    }
}
