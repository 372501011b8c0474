use thiserror::Error;

/// Assembly failures. Every variant is fatal for the whole run; the
/// driver attaches the offending line number via anyhow context.
#[derive(Error, Debug)]
pub enum AsmError {
    #[error("unsupported instruction: {0}")]
    UnsupportedInstruction(String),

    #[error("{mnemonic} expects {expected} operands, found {found}")]
    OperandCount {
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("couldn't parse numeric operand: {0}")]
    NumericConversion(String),

    #[error("line references more than one label: {0}")]
    AmbiguousLabel(String),
}
