pub use chip8::Chip8;
pub use error::{Error, Result};
pub use frame_buffer::{FrameBuffer, Pixels};
pub use instruction::Instruction;
pub use keyboard::Keyboard;
pub use quirks::Quirks;

mod chip8;
pub mod constants;
mod error;
mod frame_buffer;
mod instruction;
mod keyboard;
mod memory;
mod opcode;
mod operations;
mod quirks;
mod speaker;
mod state;
