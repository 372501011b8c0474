use std::fmt::Write;

use anyhow::Result;

use crate::constants::{IMAGE_HEADER, MIN_WIDTH};
use crate::pass_two::AssembledLine;

/// Left-pad with the field-fill character to the minimum width.
pub fn zfill(text: &str, width: usize) -> String {
    if text.len() >= width {
        text.to_owned()
    } else {
        format!("{}{}", "0".repeat(width - text.len()), text)
    }
}

/// The resolved, label-free program text, one instruction per line.
pub fn render_listing(lines: &[AssembledLine]) -> Result<String> {
    let mut listing = String::new();

    for line in lines {
        writeln!(&mut listing, "{}", zfill(&line.resolved.to_string(), MIN_WIDTH))?;
    }

    Ok(listing)
}

/// The final memory image: header token, then one hex word per line.
pub fn render_image(lines: &[AssembledLine]) -> Result<String> {
    let mut image = String::new();

    writeln!(&mut image, "{}", IMAGE_HEADER)?;
    for line in lines {
        writeln!(&mut image, "{}", line.word)?;
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use libmips::op::Opcode;
    use libmips::register::Register;
    use libmips::word::Word;

    use crate::pass_two::ResolvedLine;

    use super::*;

    fn assembled(mnemonic: &str, operands: &[&str], word: Word) -> AssembledLine {
        AssembledLine {
            resolved: ResolvedLine {
                index: 0,
                mnemonic: mnemonic.to_owned(),
                operands: operands.iter().map(|o| o.to_string()).collect(),
            },
            word,
        }
    }

    #[test]
    fn zfill_pads_short_text_only() {
        assert_eq!(zfill("j 8", 5), "00j 8");
        assert_eq!(zfill("e66ff", 5), "e66ff");
        assert_eq!(zfill("addi $sp,$sp,-1", 5), "addi $sp,$sp,-1");
    }

    #[test]
    fn image_starts_with_the_header() {
        let lines = vec![
            assembled(
                "addi",
                &["$sp", "$sp", "-1"],
                Word::i_type(Opcode::Addi, Register::Sp, Register::Sp, -1),
            ),
            assembled("j", &["3"], Word::j_type(Opcode::J, 3)),
        ];

        let image = render_image(&lines).unwrap();

        assert_eq!(image, "v2.0 raw\ne66ff\n30300\n");
    }

    #[test]
    fn listing_renders_resolved_lines() {
        let lines = vec![
            assembled(
                "addi",
                &["$sp", "$sp", "-1"],
                Word::i_type(Opcode::Addi, Register::Sp, Register::Sp, -1),
            ),
            assembled("j", &["8"], Word::j_type(Opcode::J, 8)),
        ];

        let listing = render_listing(&lines).unwrap();

        assert_eq!(listing, "addi $sp,$sp,-1\n00j 8\n");
    }
}
