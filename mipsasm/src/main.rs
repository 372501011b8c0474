use std::{env, fs, path::PathBuf};

use anyhow::Result;
use mipsasm::{assemble, Options};

struct Config {
    source: PathBuf,
    output_base: String,
    options: Options,
}

impl Config {
    fn from_args() -> Result<Config> {
        let source: PathBuf = env::args()
            .nth(1)
            .ok_or_else(|| anyhow::Error::msg("Need an input filename"))?
            .into();
        let output_base: String = env::args()
            .nth(2)
            .ok_or_else(|| anyhow::Error::msg("Need an output filename"))?;

        Ok(Config {
            source,
            output_base,
            options: Options::default(),
        })
    }
}

fn main() -> Result<()> {
    let config = Config::from_args()?;
    let program_text = fs::read_to_string(&config.source)?;

    let assembly = assemble(&program_text, &config.options)?;

    fs::write(format!("{}.lst", config.output_base), &assembly.listing)?;
    fs::write(format!("{}.dbg", config.output_base), &assembly.listing)?;
    fs::write(format!("{}.img", config.output_base), &assembly.image)?;

    Ok(())
}
