use std::str::FromStr;

use strum_macros::{EnumIter, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unknown register: {0}")]
pub struct UnknownRegister(pub String);

/// The six usable general-purpose registers plus $zero, each with a
/// fixed 4-bit code.
#[derive(EnumString, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    #[strum(serialize = "$zero")]
    Zero = 0,
    #[strum(serialize = "$t0")]
    T0 = 1,
    #[strum(serialize = "$t1")]
    T1 = 2,
    #[strum(serialize = "$t2")]
    T2 = 3,
    #[strum(serialize = "$t3")]
    T3 = 4,
    #[strum(serialize = "$t4")]
    T4 = 5,
    #[strum(serialize = "$sp")]
    Sp = 6,
}

impl Register {
    /// Name lookup with the historical fallback: anything outside the
    /// register set encodes as $zero.
    pub fn lenient(name: &str) -> Register {
        Register::from_str(name).unwrap_or(Register::Zero)
    }

    pub fn strict(name: &str) -> Result<Register, UnknownRegister> {
        Register::from_str(name).map_err(|_| UnknownRegister(name.to_owned()))
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}
