use std::str::FromStr;

use anyhow::Result;
use libmips::op::{Format, Opcode};
use libmips::register::Register;
use libmips::word::Word;

use crate::constants::mem_regex;
use crate::error::AsmError;
use crate::pass_two::ResolvedLine;
use crate::Options;

/// Encode one resolved line into a machine word. Operand order follows
/// assembly reading order, which does not always match field order:
/// the first operand of an I-type arithmetic or branch instruction
/// lands in rt, the second in rs.
pub fn encode(line: &ResolvedLine, options: &Options) -> Result<Word> {
    let opcode = Opcode::from_str(&line.mnemonic)
        .map_err(|_| AsmError::UnsupportedInstruction(line.to_string()))?;

    match opcode.format() {
        Format::R => encode_r(opcode, line, options),
        Format::I => encode_i(opcode, line, options),
        Format::J => encode_j(opcode, line),
    }
}

fn encode_r(opcode: Opcode, line: &ResolvedLine, options: &Options) -> Result<Word> {
    let operands = expect_operands(line, 3)?;

    if opcode.is_shift() {
        // sll/srl $t,$s,shamt with rd fixed to zero.
        let rt = register(&operands[0], options)?;
        let rs = register(&operands[1], options)?;
        let shamt = number(&operands[2])?;

        Ok(Word::r_type(opcode, rs, rt, Register::Zero, shamt))
    } else {
        // add/sub/and/or/nor $d,$s,$t
        let rd = register(&operands[0], options)?;
        let rs = register(&operands[1], options)?;
        let rt = register(&operands[2], options)?;

        Ok(Word::r_type(opcode, rs, rt, rd, 0))
    }
}

fn encode_i(opcode: Opcode, line: &ResolvedLine, options: &Options) -> Result<Word> {
    if opcode.is_load_store() {
        // lw/sw $t,offset($s)
        let operands = expect_operands(line, 2)?;
        let rt = register(&operands[0], options)?;
        let (offset, rs) = mem_operand(&operands[1], options)?;

        return Ok(Word::i_type(opcode, rs, rt, offset));
    }

    // addi/subi/andi/ori/beq/bneq $t,$s,imm
    let operands = expect_operands(line, 3)?;
    let rt = register(&operands[0], options)?;
    let rs = register(&operands[1], options)?;
    let immediate = number(&operands[2])?;

    Ok(Word::i_type(opcode, rs, rt, immediate))
}

fn encode_j(opcode: Opcode, line: &ResolvedLine) -> Result<Word> {
    let operands = expect_operands(line, 1)?;
    let target = number(&operands[0])?;

    Ok(Word::j_type(opcode, target))
}

/// Extra operands are ignored; too few is an error.
fn expect_operands(line: &ResolvedLine, expected: usize) -> Result<&[String], AsmError> {
    if line.operands.len() < expected {
        return Err(AsmError::OperandCount {
            mnemonic: line.mnemonic.clone(),
            expected,
            found: line.operands.len(),
        });
    }

    Ok(&line.operands)
}

fn register(name: &str, options: &Options) -> Result<Register> {
    if options.strict_registers {
        Ok(Register::strict(name)?)
    } else {
        Ok(Register::lenient(name))
    }
}

fn number(text: &str) -> Result<i32, AsmError> {
    text.parse()
        .map_err(|_| AsmError::NumericConversion(text.to_owned()))
}

fn mem_operand(text: &str, options: &Options) -> Result<(i32, Register)> {
    let caps = mem_regex()
        .captures(text)
        .ok_or_else(|| AsmError::NumericConversion(text.to_owned()))?;

    Ok((number(&caps["offset"])?, register(&caps["reg"], options)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(mnemonic: &str, operands: &[&str]) -> ResolvedLine {
        ResolvedLine {
            index: 0,
            mnemonic: mnemonic.to_owned(),
            operands: operands.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn encode_lenient(mnemonic: &str, operands: &[&str]) -> Result<Word> {
        encode(&line(mnemonic, operands), &Options::default())
    }

    #[test]
    fn r_type_operand_order() {
        // add $d,$s,$t: destination first in text, third field in the word.
        let word = encode_lenient("add", &["$t0", "$t1", "$t2"]).unwrap();

        assert_eq!(word.opcode(), Some(Opcode::Add));
        assert_eq!(word.rd(), 1);
        assert_eq!(word.rs(), 2);
        assert_eq!(word.rt(), 3);
        assert_eq!(word.shamt(), 0);
    }

    #[test]
    fn shift_uses_shamt_and_zero_rd() {
        let word = encode_lenient("sll", &["$t0", "$t1", "3"]).unwrap();

        assert_eq!(word.opcode(), Some(Opcode::Sll));
        assert_eq!(word.rt(), 1);
        assert_eq!(word.rs(), 2);
        assert_eq!(word.rd(), 0);
        assert_eq!(word.shamt(), 3);
    }

    #[test]
    fn i_type_first_operand_is_rt() {
        let word = encode_lenient("addi", &["$t0", "$t1", "7"]).unwrap();

        assert_eq!(word.rt(), 1);
        assert_eq!(word.rs(), 2);
        assert_eq!(word.immediate(), 7);
    }

    #[test]
    fn negative_immediate_is_twos_complement() {
        let word = encode_lenient("addi", &["$t0", "$t0", "-1"]).unwrap();

        assert_eq!(word.bits() & 0xFF, 0xFF);
        assert_eq!(word.immediate(), -1);
        assert!(!word.to_string().contains('-'));
    }

    #[test]
    fn load_store_splits_the_mem_operand() {
        let word = encode_lenient("lw", &["$t0", "-4($sp)"]).unwrap();

        assert_eq!(word.opcode(), Some(Opcode::Lw));
        assert_eq!(word.rt(), 1);
        assert_eq!(word.rs(), 6);
        assert_eq!(word.immediate(), -4);
    }

    #[test]
    fn jump_encodes_the_target_high() {
        let word = encode_lenient("j", &["3"]).unwrap();

        assert_eq!(word.bits(), 0x30300);
    }

    #[test]
    fn unknown_mnemonic_is_unsupported() {
        let err = encode_lenient("foo", &["$t0", "$t0", "$t1"]).unwrap_err();

        assert!(err
            .to_string()
            .contains("unsupported instruction: foo $t0,$t0,$t1"));
    }

    #[test]
    fn missing_operands_are_counted() {
        let err = encode_lenient("add", &["$t0", "$t1"]).unwrap_err();

        assert!(err.to_string().contains("add expects 3 operands, found 2"));
    }

    #[test]
    fn bad_numeric_operand() {
        let err = encode_lenient("addi", &["$t0", "$t1", "LOOP"]).unwrap_err();

        assert!(err
            .to_string()
            .contains("couldn't parse numeric operand: LOOP"));
    }

    #[test]
    fn malformed_mem_operand() {
        let err = encode_lenient("sw", &["$t0", "$sp"]).unwrap_err();

        assert!(err.to_string().contains("couldn't parse numeric operand"));
    }

    #[test]
    fn unknown_register_encodes_as_zero_by_default() {
        let word = encode_lenient("add", &["$t9", "$t9", "$t9"]).unwrap();

        assert_eq!(word.rd(), 0);
        assert_eq!(word.rs(), 0);
        assert_eq!(word.rt(), 0);
    }

    #[test]
    fn strict_mode_rejects_unknown_registers() {
        let options = Options {
            strict_registers: true,
        };

        let err = encode(&line("add", &["$t9", "$t0", "$t1"]), &options).unwrap_err();

        assert!(err.to_string().contains("unknown register: $t9"));
    }
}
