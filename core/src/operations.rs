use rand::Rng;

use crate::constants::SPRITE_SIZE;
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::state::State;

/// Applies a decoded instruction to the state, leaving the pc on the next instruction to run.
pub fn execute(instruction: Instruction, state: &mut State) -> Result<()> {
    match instruction {
        Instruction::Clear => clr(state),
        Instruction::Return => rts(state)?,
        Instruction::Jump(addr) => jump(state, addr),
        Instruction::Call(addr) => call(state, addr),
        Instruction::SkipEqByte { x, nn } => state.skip_if(state.v[x] == nn),
        Instruction::SkipNeByte { x, nn } => state.skip_if(state.v[x] != nn),
        Instruction::SkipEqReg { x, y } => state.skip_if(state.v[x] == state.v[y]),
        Instruction::LoadByte { x, nn } => load(state, x, nn),
        Instruction::AddByte { x, nn } => add(state, x, nn),
        Instruction::Move { x, y } => alu(state, x, y, |_, vy| vy),
        Instruction::Or { x, y } => alu(state, x, y, |vx, vy| vx | vy),
        Instruction::And { x, y } => alu(state, x, y, |vx, vy| vx & vy),
        Instruction::Xor { x, y } => alu(state, x, y, |vx, vy| vx ^ vy),
        Instruction::AddReg { x, y } => addr(state, x, y),
        Instruction::Sub { x, y } => sub(state, x, y),
        Instruction::ShiftRight { x } => shr(state, x),
        Instruction::SubN { x, y } => subn(state, x, y),
        Instruction::ShiftLeft { x } => shl(state, x),
        Instruction::SkipNeReg { x, y } => state.skip_if(state.v[x] != state.v[y]),
        Instruction::LoadI(addr) => loadi(state, addr),
        Instruction::JumpV0(addr) => {
            let offset = u16::from(state.v[0x0]);
            jump(state, addr + offset)
        }
        Instruction::Random { x, nn } => rand(state, x, nn),
        Instruction::Draw { x, y, n } => draw(state, x, y, n),
        Instruction::SkipKeyPressed { x } => {
            state.skip_if(state.keyboard.is_pressed(state.v[x]))
        }
        Instruction::SkipKeyReleased { x } => {
            state.skip_if(!state.keyboard.is_pressed(state.v[x]))
        }
        Instruction::LoadDelay { x } => {
            let delay = state.delay_timer;
            load(state, x, delay)
        }
        Instruction::WaitKey { x } => keyd(state, x),
        Instruction::SetDelay { x } => {
            state.delay_timer = state.v[x];
            state.advance();
        }
        Instruction::SetSound { x } => {
            state.speaker.set_sound_timer(state.v[x]);
            state.advance();
        }
        Instruction::AddI { x } => {
            let addr = state.i.wrapping_add(u16::from(state.v[x]));
            loadi(state, addr)
        }
        Instruction::LoadSprite { x } => {
            let addr = u16::from(state.v[x]) * SPRITE_SIZE;
            loadi(state, addr)
        }
        Instruction::Bcd { x } => bcd(state, x),
        Instruction::Store { x } => stor(state, x),
        Instruction::Restore { x } => read(state, x),
    }
    Ok(())
}

/// clear
fn clr(state: &mut State) {
    state.frame_buffer.reset();
    state.advance();
}

/// PC = STACK.pop() + 2
/// Fails without touching the state if there is nothing to return to.
fn rts(state: &mut State) -> Result<()> {
    let addr = state
        .stack
        .pop()
        .ok_or(Error::StackUnderflow { pc: state.pc })?;
    state.pc = addr;
    state.advance();
    Ok(())
}

/// PC = addr
fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, addr: u16) {
    state.stack.push(state.pc);
    state.pc = addr;
}

/// Vx = value
fn load(state: &mut State, x: usize, value: u8) {
    state.v[x] = value;
    state.advance();
}

/// Vx += nn
/// Overflow is dropped and VF left alone
fn add(state: &mut State, x: usize, nn: u8) {
    state.v[x] = state.v[x].wrapping_add(nn);
    state.advance();
}

/// Vx = op(Vx, Vy)
fn alu(state: &mut State, x: usize, y: usize, op: fn(u8, u8) -> u8) {
    state.v[x] = op(state.v[x], state.v[y]);
    state.advance();
}

/// Vx += Vy; VF = overflow
fn addr(state: &mut State, x: usize, y: usize) {
    let (res, over) = state.v[x].overflowing_add(state.v[y]);
    state.v[x] = res;
    state.v[0xF] = u8::from(over);
    state.advance();
}

/// Vx -= Vy; VF = !underflow
fn sub(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.v[x].overflowing_sub(state.v[y]);
    state.v[x] = res;
    state.v[0xF] = u8::from(!under);
    state.advance();
}

/// Vx = Vy - Vx; VF = !underflow
fn subn(state: &mut State, x: usize, y: usize) {
    let (res, under) = state.v[y].overflowing_sub(state.v[x]);
    state.v[x] = res;
    state.v[0xF] = u8::from(!under);
    state.advance();
}

/// Vx >>= 1; VF = least significant bit
fn shr(state: &mut State, x: usize) {
    state.v[0xF] = state.v[x] & 0x1;
    state.v[x] >>= 1;
    state.advance();
}

/// Vx <<= 1; VF = most significant bit
/// With the legacy shift quirk VF gets the whole of Vx instead.
fn shl(state: &mut State, x: usize) {
    state.v[0xF] = if state.quirks.legacy_shift_flag {
        state.v[x]
    } else {
        state.v[x] >> 7
    };
    state.v[x] <<= 1;
    state.advance();
}

/// I = addr
fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    state.advance();
}

/// Vx = rand_byte & nn
fn rand(state: &mut State, x: usize, nn: u8) {
    let rand_byte: u8 = state.rng.gen();
    load(state, x, rand_byte & nn);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position Vx, Vy on the FrameBuffer with wrapping.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: usize, y: usize, n: u8) {
    let (left, top) = (state.v[x] as usize, state.v[y] as usize);
    let sprite = state.memory.read_range(state.i, n as usize);

    // Reset the carry flag (used for collision detection)
    state.v[0xF] = 0x0;

    for (row, byte) in sprite.iter().enumerate() {
        for bit in 0..8 {
            if byte & (0x80 >> bit) != 0 {
                let (px, py) = (left + bit, top + row);
                state.v[0xF] |= state.frame_buffer.get_pixel(px, py);
                state.frame_buffer.flip_pixel(px, py);
            }
        }
    }
    state.advance();
}

/// await keypress for Vx
/// The pc stays put until a key is down, so the instruction is simply run again.
fn keyd(state: &mut State, x: usize) {
    if let Some(key) = state.keyboard.most_recently_pressed() {
        load(state, x, key);
    }
}

/// mem[I..I+3] = bcd(Vx)
/// With the legacy BCD quirk every digit is written to I.
fn bcd(state: &mut State, x: usize) {
    let value = state.v[x];
    let digits = [value / 100, value / 10 % 10, value % 10];
    for (offset, digit) in (0u16..).zip(digits.iter()) {
        let addr = if state.quirks.legacy_bcd {
            state.i
        } else {
            state.i.wrapping_add(offset)
        };
        state.memory.write_byte(addr, *digit);
    }
    state.advance();
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: usize) {
    for (offset, register) in (0u16..).zip(state.v[..=x].iter()) {
        state.memory.write_byte(state.i.wrapping_add(offset), *register);
    }
    state.advance();
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: usize) {
    let bytes = state.memory.read_range(state.i, x + 1);
    state.v[..=x].copy_from_slice(&bytes);
    state.advance();
}
