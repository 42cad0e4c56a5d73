use crate::error::{Error, Result};
use crate::opcode::Opcode;

/// A decoded instruction with its operands.
///
/// `x` and `y` are register indices, `nn` an immediate byte, `addr` a 12-bit address and `n`
/// the height of a sprite in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` clear the display
    Clear,
    /// `00EE` PC = STACK.pop() + 2
    Return,
    /// `1nnn` PC = addr
    Jump(u16),
    /// `2nnn` STACK.push(PC); PC = addr
    Call(u16),
    /// `3xnn` skip if Vx == nn
    SkipEqByte { x: usize, nn: u8 },
    /// `4xnn` skip if Vx != nn
    SkipNeByte { x: usize, nn: u8 },
    /// `5xy0` skip if Vx == Vy
    SkipEqReg { x: usize, y: usize },
    /// `6xnn` Vx = nn
    LoadByte { x: usize, nn: u8 },
    /// `7xnn` Vx += nn
    AddByte { x: usize, nn: u8 },
    /// `8xy0` Vx = Vy
    Move { x: usize, y: usize },
    /// `8xy1` Vx |= Vy
    Or { x: usize, y: usize },
    /// `8xy2` Vx &= Vy
    And { x: usize, y: usize },
    /// `8xy3` Vx ^= Vy
    Xor { x: usize, y: usize },
    /// `8xy4` Vx += Vy; VF = carry
    AddReg { x: usize, y: usize },
    /// `8xy5` Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// `8x06` Vx >>= 1; VF = shifted out bit
    ShiftRight { x: usize },
    /// `8xy7` Vx = Vy - Vx; VF = !borrow
    SubN { x: usize, y: usize },
    /// `8x0E` Vx <<= 1; VF = shifted out bit
    ShiftLeft { x: usize },
    /// `9xy0` skip if Vx != Vy
    SkipNeReg { x: usize, y: usize },
    /// `Annn` I = addr
    LoadI(u16),
    /// `Bnnn` PC = V0 + addr
    JumpV0(u16),
    /// `Cxnn` Vx = random & nn
    Random { x: usize, nn: u8 },
    /// `Dxyn` draw an n row sprite from mem[I..] at (Vx, Vy)
    Draw { x: usize, y: usize, n: u8 },
    /// `Ex9E` skip if key Vx is pressed
    SkipKeyPressed { x: usize },
    /// `ExA1` skip if key Vx is not pressed
    SkipKeyReleased { x: usize },
    /// `Fx07` Vx = DT
    LoadDelay { x: usize },
    /// `Fx0A` wait for a key press and store it in Vx
    WaitKey { x: usize },
    /// `Fx15` DT = Vx
    SetDelay { x: usize },
    /// `Fx18` ST = Vx
    SetSound { x: usize },
    /// `Fx1E` I += Vx
    AddI { x: usize },
    /// `Fx29` I = address of the glyph for Vx
    LoadSprite { x: usize },
    /// `Fx33` mem[I..] = bcd(Vx)
    Bcd { x: usize },
    /// `Fx55` mem[I..=I+x] = V0..=Vx
    Store { x: usize },
    /// `Fx65` V0..=Vx = mem[I..=I+x]
    Restore { x: usize },
}

impl Instruction {
    /// Selects the Instruction for a given opcode.
    ///
    /// Operand nibbles that an instruction doesn't use must be zero where the encoding fixes
    /// them (`5xy0`, `8x06`, `8x0E`, `9xy0`); anything else is an invalid opcode.
    pub fn decode(op: u16) -> Result<Self> {
        let (x, y, n, nn, addr) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x1, ..) => Instruction::Jump(addr),
            (0x2, ..) => Instruction::Call(addr),
            (0x3, ..) => Instruction::SkipEqByte { x, nn },
            (0x4, ..) => Instruction::SkipNeByte { x, nn },
            (0x5, .., 0x0) => Instruction::SkipEqReg { x, y },
            (0x6, ..) => Instruction::LoadByte { x, nn },
            (0x7, ..) => Instruction::AddByte { x, nn },
            (0x8, .., 0x0) => Instruction::Move { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, _, 0x0, 0x6) => Instruction::ShiftRight { x },
            (0x8, .., 0x7) => Instruction::SubN { x, y },
            (0x8, _, 0x0, 0xE) => Instruction::ShiftLeft { x },
            (0x9, .., 0x0) => Instruction::SkipNeReg { x, y },
            (0xA, ..) => Instruction::LoadI(addr),
            (0xB, ..) => Instruction::JumpV0(addr),
            (0xC, ..) => Instruction::Random { x, nn },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::SkipKeyPressed { x },
            (0xE, _, 0xA, 0x1) => Instruction::SkipKeyReleased { x },
            (0xF, _, 0x0, 0x7) => Instruction::LoadDelay { x },
            (0xF, _, 0x0, 0xA) => Instruction::WaitKey { x },
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay { x },
            (0xF, _, 0x1, 0x8) => Instruction::SetSound { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddI { x },
            (0xF, _, 0x2, 0x9) => Instruction::LoadSprite { x },
            (0xF, _, 0x3, 0x3) => Instruction::Bcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::Store { x },
            (0xF, _, 0x6, 0x5) => Instruction::Restore { x },
            _ => return Err(Error::InvalidOpcode(op)),
        };
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(op: u16) -> Instruction {
        Instruction::decode(op).unwrap()
    }

    #[test]
    fn test_00e0_cls() {
        assert_eq!(decode(0x00E0), Instruction::Clear);
    }

    #[test]
    fn test_00ee_ret() {
        assert_eq!(decode(0x00EE), Instruction::Return);
    }

    #[test]
    fn test_address_instructions() {
        assert_eq!(decode(0x1ABC), Instruction::Jump(0xABC));
        assert_eq!(decode(0x2123), Instruction::Call(0x123));
        assert_eq!(decode(0xAABC), Instruction::LoadI(0xABC));
        assert_eq!(decode(0xB300), Instruction::JumpV0(0x300));
    }

    #[test]
    fn test_byte_instructions() {
        assert_eq!(decode(0x3A12), Instruction::SkipEqByte { x: 0xA, nn: 0x12 });
        assert_eq!(decode(0x4A12), Instruction::SkipNeByte { x: 0xA, nn: 0x12 });
        assert_eq!(decode(0x6B34), Instruction::LoadByte { x: 0xB, nn: 0x34 });
        assert_eq!(decode(0x7C56), Instruction::AddByte { x: 0xC, nn: 0x56 });
        assert_eq!(decode(0xC1FF), Instruction::Random { x: 0x1, nn: 0xFF });
    }

    #[test]
    fn test_register_pair_instructions() {
        assert_eq!(decode(0x5120), Instruction::SkipEqReg { x: 1, y: 2 });
        assert_eq!(decode(0x9120), Instruction::SkipNeReg { x: 1, y: 2 });
        assert_eq!(decode(0x8120), Instruction::Move { x: 1, y: 2 });
        assert_eq!(decode(0x8121), Instruction::Or { x: 1, y: 2 });
        assert_eq!(decode(0x8122), Instruction::And { x: 1, y: 2 });
        assert_eq!(decode(0x8123), Instruction::Xor { x: 1, y: 2 });
        assert_eq!(decode(0x8124), Instruction::AddReg { x: 1, y: 2 });
        assert_eq!(decode(0x8125), Instruction::Sub { x: 1, y: 2 });
        assert_eq!(decode(0x8127), Instruction::SubN { x: 1, y: 2 });
    }

    #[test]
    fn test_shifts() {
        assert_eq!(decode(0x8306), Instruction::ShiftRight { x: 3 });
        assert_eq!(decode(0x830E), Instruction::ShiftLeft { x: 3 });
    }

    #[test]
    fn test_dxyn_drw() {
        assert_eq!(decode(0xD12F), Instruction::Draw { x: 1, y: 2, n: 0xF });
    }

    #[test]
    fn test_key_instructions() {
        assert_eq!(decode(0xE49E), Instruction::SkipKeyPressed { x: 4 });
        assert_eq!(decode(0xE4A1), Instruction::SkipKeyReleased { x: 4 });
        assert_eq!(decode(0xF40A), Instruction::WaitKey { x: 4 });
    }

    #[test]
    fn test_f_family() {
        assert_eq!(decode(0xF507), Instruction::LoadDelay { x: 5 });
        assert_eq!(decode(0xF515), Instruction::SetDelay { x: 5 });
        assert_eq!(decode(0xF518), Instruction::SetSound { x: 5 });
        assert_eq!(decode(0xF51E), Instruction::AddI { x: 5 });
        assert_eq!(decode(0xF529), Instruction::LoadSprite { x: 5 });
        assert_eq!(decode(0xF533), Instruction::Bcd { x: 5 });
        assert_eq!(decode(0xF555), Instruction::Store { x: 5 });
        assert_eq!(decode(0xF565), Instruction::Restore { x: 5 });
    }

    #[test]
    fn test_rejects_undefined_encodings() {
        let invalid = [
            0x0000, 0x00E1, 0x0123, 0x00FF, 0x5121, 0x912F, 0x8128, 0x812D, 0x812F, 0x8116,
            0x811E, 0xE19F, 0xE1A2, 0xF100, 0xF134, 0xF166, 0xFFFF,
        ];
        for op in invalid.iter() {
            match Instruction::decode(*op) {
                Err(Error::InvalidOpcode(reported)) => assert_eq!(reported, *op),
                other => panic!("{:#06X} decoded as {:?}", op, other),
            }
        }
    }

    #[test]
    fn test_every_family_has_a_valid_encoding() {
        let valid = [
            0x00E0, 0x00EE, 0x1000, 0x2000, 0x3000, 0x4000, 0x5000, 0x6000, 0x7000, 0x8000,
            0x9000, 0xA000, 0xB000, 0xC000, 0xD000, 0xE09E, 0xF007,
        ];
        assert!(valid.iter().all(|op| Instruction::decode(*op).is_ok()));
    }
}
