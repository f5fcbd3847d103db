use std::io;
use thiserror::Error;

/// Everything that can go wrong inside the machine. ROM failures are
/// recoverable by the caller; the rest end the execution session, since
/// carrying on would execute garbage.
#[derive(Debug, Error)]
pub enum Chip8Error {
    /// the ROM source could not be read at all
    #[error("failed to read ROM image: {0}")]
    RomUnreadable(#[from] io::Error),

    /// the ROM image does not fit between 0x200 and the end of RAM
    #[error("ROM is too large ({size} bytes, {max} available)")]
    RomTooLarge { size: usize, max: usize },

    /// fetched a word that decodes to nothing in the instruction set
    #[error("invalid opcode {opcode:#06x} at {addr:#05x}")]
    InvalidOpcode { opcode: u16, addr: u16 },

    /// more than 16 nested calls
    #[error("call stack overflow at {addr:#05x}")]
    StackOverflow { addr: u16 },

    /// return with no call outstanding
    #[error("call stack underflow at {addr:#05x}")]
    StackUnderflow { addr: u16 },
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
