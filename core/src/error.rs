use std::io;

use thiserror::Error;

/// Failures surfaced by the interpreter.
///
/// None of these are recovered internally; the caller of `step` (or of the
/// program loaders) decides whether to halt, reset or carry on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid opcode: {0:#06X}")]
    InvalidOpcode(u16),

    #[error("return with an empty call stack at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    #[error("write of {len} bytes at {offset:#06X} exceeds memory")]
    OutOfBounds { offset: u16, len: usize },

    #[error("unable to read program: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_opcode_message() {
        assert_eq!(
            Error::InvalidOpcode(0x5AB1).to_string(),
            "invalid opcode: 0x5AB1"
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::OutOfBounds {
            offset: 0x0FFE,
            len: 4,
        };
        assert_eq!(err.to_string(), "write of 4 bytes at 0x0FFE exceeds memory");
    }
}
