use log::debug;

use crate::constants::{MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET};
use crate::error::{Error, Result};

/// # Memory
///
/// 4096 bytes of addressable memory.
/// - `0x000..0x050` holds the hex digit sprite sheet
/// - `0x050..0x200` is otherwise unused
/// - `0x200..` is where programs are loaded
///
/// Reads and single-byte writes wrap around the end of memory. Only a malformed
/// program ever relies on this; well formed ones keep `I` inside the address space.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.reset();
        memory
    }

    /// Zeroes memory and restores the sprite sheet.
    pub fn reset(&mut self) {
        self.bytes = [0; MEMORY_SIZE];
        self.bytes[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// Fails without writing anything if the data would run past the end of memory.
    pub fn write(&mut self, offset: u16, data: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start + data.len();
        if end > MEMORY_SIZE {
            return Err(Error::OutOfBounds {
                offset,
                len: data.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Copies a program into memory at `PROGRAM_START`.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.write(PROGRAM_START, program)?;
        debug!(
            "loaded {} bytes at {:#05X}",
            program.len(),
            PROGRAM_START
        );
        Ok(())
    }

    pub fn read(&self, address: u16) -> u8 {
        self.bytes[Self::wrap(address)]
    }

    /// Reads `len` consecutive bytes starting at `address`.
    pub fn read_range(&self, address: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.bytes[(address as usize + offset) % MEMORY_SIZE])
            .collect()
    }

    /// Reads the big-endian 16-bit word at `address`.
    pub fn read_word(&self, address: u16) -> u16 {
        let left = u16::from(self.read(address));
        let right = u16::from(self.read(address.wrapping_add(1)));
        left << 8 | right
    }

    pub fn write_byte(&mut self, address: u16, value: u8) {
        self.bytes[Self::wrap(address)] = value;
    }

    /// The raw contents of memory.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn wrap(address: u16) -> usize {
        address as usize % MEMORY_SIZE
    }
}
