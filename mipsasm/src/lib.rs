use anyhow::Result;

mod constants;
mod encoder;
mod error;
mod image;
mod labels;
mod pass_one;
mod pass_two;
mod tokenizer;

pub use error::AsmError;

/// Assembler knobs. The historical behavior maps unknown register names
/// to $zero; strict mode turns that into an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub strict_registers: bool,
}

/// The products of a successful run: the resolved listing and the
/// loadable memory image. Either both exist or the run failed.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub listing: String,
    pub image: String,
}

/// Assemble a program from text into its memory image.
///
/// # Errors
///
/// If there's an error in the assembly code
pub fn assemble_program(program_text: &str) -> Result<String> {
    Ok(assemble(program_text, &Options::default())?.image)
}

pub fn assemble_with_listing(program_text: &str) -> Result<(String, String)> {
    let assembly = assemble(program_text, &Options::default())?;

    Ok((assembly.image, assembly.listing))
}

pub fn assemble(program_text: &str, options: &Options) -> Result<Assembly> {
    let pass_one = pass_one::pass_one(program_text);
    let lines = pass_two::pass_two(&pass_one, options)?;

    Ok(Assembly {
        listing: image::render_listing(&lines)?,
        image: image::render_image(&lines)?,
    })
}
