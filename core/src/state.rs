use rand::rngs::StdRng;

use crate::constants::{OPCODE_SIZE, PROGRAM_START};
use crate::frame_buffer::FrameBuffer;
use crate::keyboard::Keyboard;
use crate::memory::Memory;
use crate::quirks::Quirks;
use crate::speaker::Speaker;

/// The complete interpreter state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - return addresses pushed by CALL and popped by RET; it has no fixed depth
///
/// Timers
/// - an 8-bit delay timer
/// - the sound timer lives in the speaker, which knows whether it should be beeping
///
/// ## Peripherals
/// - 4096 bytes of memory
/// - the 64x32 frame buffer
/// - the pressed status of keys 0..F
///
/// Everything but the keyboard, the random number generator and the quirks is restored by
/// `reset`.
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: Vec<u16>,
    pub delay_timer: u8,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub keyboard: Keyboard,
    pub speaker: Speaker,
    pub rng: StdRng,
    pub quirks: Quirks,
}

impl State {
    pub fn new(quirks: Quirks, rng: StdRng) -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: Vec::new(),
            delay_timer: 0,
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(),
            keyboard: Keyboard::new(),
            speaker: Speaker::new(),
            rng,
            quirks,
        }
    }

    pub fn reset(&mut self) {
        self.v = [0; 16];
        self.i = 0;
        self.pc = PROGRAM_START;
        self.stack.clear();
        self.delay_timer = 0;
        self.memory.reset();
        self.frame_buffer.reset();
        self.speaker.reset();
    }

    /// Moves on to the next instruction.
    pub fn advance(&mut self) {
        self.pc = self.pc.wrapping_add(OPCODE_SIZE);
    }

    /// Moves on to the next instruction, skipping over it if `condition` holds.
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition {
            2 * OPCODE_SIZE
        } else {
            OPCODE_SIZE
        };
        self.pc = self.pc.wrapping_add(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn state() -> State {
        State::new(Quirks::default(), StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.v, [0; 16]);
        assert!(state.stack.is_empty());
    }

    #[test]
    fn test_skip_if() {
        let mut state = state();
        state.skip_if(true);
        assert_eq!(state.pc, 0x204);
        state.skip_if(false);
        assert_eq!(state.pc, 0x206);
    }

    #[test]
    fn test_advance_wraps() {
        let mut state = state();
        state.pc = 0xFFFE;
        state.advance();
        assert_eq!(state.pc, 0x0000);
    }

    #[test]
    fn test_reset_keeps_keys() {
        let mut state = state();
        state.v[0x3] = 0x9;
        state.i = 0x123;
        state.pc = 0x400;
        state.stack.push(0x300);
        state.delay_timer = 0x10;
        state.speaker.set_sound_timer(0x10);
        state.keyboard.press(0x7);
        state.reset();
        assert_eq!(state.v, [0; 16]);
        assert_eq!(state.i, 0);
        assert_eq!(state.pc, 0x200);
        assert!(state.stack.is_empty());
        assert_eq!(state.delay_timer, 0);
        assert_eq!(state.speaker.sound_timer(), 0);
        assert!(state.frame_buffer.is_dirty());
        assert!(state.keyboard.is_pressed(0x7));
    }
}
