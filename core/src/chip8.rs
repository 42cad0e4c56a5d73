use std::io::Read;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::keyboard::Keyboard;
use crate::operations;
use crate::quirks::Quirks;
use crate::state::State;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the complete machine `state`; nothing is shared with other instances.
///
/// Supplies interfaces for:
/// - resetting the machine and loading programs
/// - pressing and releasing keys
/// - executing a single instruction with `step`
/// - advancing its timers with `tick`
/// - inspecting its frame buffer, speaker and registers
///
/// How often `step` and `tick` are called is up to whoever drives the machine.
/// Timers are meant to tick at `TIMER_FREQUENCY`.
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_quirks(Quirks::default())
    }

    pub fn with_quirks(quirks: Quirks) -> Self {
        Chip8 {
            state: State::new(quirks, StdRng::from_entropy()),
        }
    }

    /// Replaces the random number generator with one seeded by `seed`,
    /// making `RND` reproducible.
    pub fn reseed(&mut self, seed: u64) {
        self.state.rng = StdRng::seed_from_u64(seed);
    }

    /// Restores registers, timers, memory and the display to their power-on values.
    /// Pressed keys are left as they are.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("reset");
    }

    /// Copies a program into memory at `PROGRAM_START`.
    ///
    /// Nothing else is touched, so call `reset` first to run it from a clean machine.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        self.state.memory.load_program(program)
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<()> {
        let mut program = Vec::new();
        reader.read_to_end(&mut program)?;
        self.load_program(&program)
    }

    /// Fetches, decodes and executes the instruction at the pc.
    ///
    /// An opcode that can't be decoded is returned as an error and the pc is left pointing at it.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.state.pc;
        let op = self.state.memory.read_word(pc);
        let instruction = Instruction::decode(op)?;
        trace!("{:04X} {:04X} {:?}", pc, op, instruction);
        operations::execute(instruction, &mut self.state)
    }

    /// Counts both timers down by one.
    pub fn tick(&mut self) {
        self.state.delay_timer = self.state.delay_timer.saturating_sub(1);
        self.state.speaker.tick();
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.state.keyboard.press(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.state.keyboard.release(key);
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.state.keyboard
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.state.keyboard
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, marking it as seen.
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.frame_buffer.is_dirty() {
            self.state.frame_buffer.clear_dirty();
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn is_beeping(&self) -> bool {
        self.state.speaker.is_beeping()
    }

    pub fn registers(&self) -> &[u8; 16] {
        &self.state.v
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn i(&self) -> u16 {
        self.state.i
    }

    pub fn stack(&self) -> &[u16] {
        &self.state.stack
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.delay_timer
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.speaker.sound_timer()
    }

    pub fn memory(&self) -> &[u8] {
        self.state.memory.bytes()
    }

    pub fn quirks(&self) -> Quirks {
        self.state.quirks
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
