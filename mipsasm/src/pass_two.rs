use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use libmips::op::Opcode;
use libmips::word::Word;

use crate::encoder;
use crate::error::AsmError;
use crate::labels::Labels;
use crate::pass_one::{PassOne, SourceLine};
use crate::tokenizer::tokenize;
use crate::Options;

/// A tokenized line with any label reference already rewritten to its
/// numeric value.
#[derive(Debug, Clone)]
pub struct ResolvedLine {
    pub index: usize,
    pub mnemonic: String,
    pub operands: Vec<String>,
}

impl Display for ResolvedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.operands.is_empty() {
            write!(f, "{}", self.mnemonic)
        } else {
            write!(f, "{} {}", self.mnemonic, self.operands.join(","))
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssembledLine {
    pub resolved: ResolvedLine,
    pub word: Word,
}

/// Second pass: substitute label references and encode every line. Any
/// failure aborts the run with the offending line attached.
pub fn pass_two(pass_one: &PassOne, options: &Options) -> Result<Vec<AssembledLine>> {
    let mut assembled = Vec::with_capacity(pass_one.lines.len());

    for line in &pass_one.lines {
        let assembled_line = assemble_line(line, &pass_one.labels, options)
            .with_context(|| format!("Error on line {}: {}", line.index, line.text))?;
        assembled.push(assembled_line);
    }

    Ok(assembled)
}

fn assemble_line(line: &SourceLine, labels: &Labels, options: &Options) -> Result<AssembledLine> {
    let resolved = substitute(line, labels)?;
    let word = encoder::encode(&resolved, options)?;

    Ok(AssembledLine { resolved, word })
}

/// Label substitution is token-exact: an operand is a label reference
/// only if its normalized text is a key in the label table. Branches
/// take the PC-relative distance to the label, jumps take the absolute
/// line index.
fn substitute(line: &SourceLine, labels: &Labels) -> Result<ResolvedLine> {
    let (mnemonic, mut operands) = tokenize(&line.text)?;

    let references = operands
        .iter()
        .enumerate()
        .filter(|(_, operand)| labels.lookup(operand).is_some())
        .map(|(slot, _)| slot)
        .collect::<Vec<_>>();

    if references.len() > 1 {
        return Err(AsmError::AmbiguousLabel(line.text.clone()).into());
    }

    if let (Ok(opcode), Some(&slot)) = (Opcode::from_str(&mnemonic), references.first()) {
        // Branches name their target last, jumps name it first. A label
        // in any other slot is left alone and fails downstream.
        let target_slot = if opcode.is_branch() {
            operands.len().saturating_sub(1)
        } else {
            0
        };

        if (opcode.is_branch() || opcode.is_jump()) && slot == target_slot {
            if let Some(target) = labels.lookup(&operands[slot]) {
                let value = if opcode.is_branch() {
                    target as i32 - line.index as i32 - 1
                } else {
                    target as i32
                };
                operands[slot] = value.to_string();
            }
        }
    }

    Ok(ResolvedLine {
        index: line.index,
        mnemonic,
        operands,
    })
}
