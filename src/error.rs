use thiserror::Error;

/// The crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no component responds to address {0:#06x}")]
    NoResponder(u16),

    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),

    #[error("component \"{0}\" overlaps an already registered component")]
    Overlap(String),

    #[error("component \"{0}\" is already registered")]
    Duplicate(String),

    #[error("clock cycle counter wrapped")]
    ClockWrap,

    #[error("instruction \"{0}\" was registered with an addressing mode its access class does not support")]
    SignatureMismatch(String),
}
