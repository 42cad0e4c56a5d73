use emu8_core::{Chip8, Error, Quirks};

/// Builds a machine with `program` loaded at the start of program memory.
fn boot(program: &[u16]) -> Chip8 {
    let bytes: Vec<u8> = program.iter().flat_map(|op| op.to_be_bytes()).collect();
    let mut chip8 = Chip8::new();
    chip8.reseed(0xC8);
    chip8.load_program(&bytes).unwrap();
    chip8
}

fn run(chip8: &mut Chip8, steps: usize) {
    for _ in 0..steps {
        chip8.step().unwrap();
    }
}

#[test]
fn test_first_opcode_is_first_two_bytes() {
    let mut chip8 = Chip8::new();
    chip8.load_program(&[0x61, 0x2A, 0xFF, 0xFF]).unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.registers()[0x1], 0x2A);
}

#[test]
fn test_nested_calls_return_past_the_call_site() {
    let mut chip8 = boot(&[
        0x2206, // 0x200 CALL 0x206
        0x6101, // 0x202 LD V1, 1
        0x1204, // 0x204 JP 0x204
        0x220C, // 0x206 CALL 0x20C
        0x6202, // 0x208 LD V2, 2
        0x00EE, // 0x20A RET
        0x6303, // 0x20C LD V3, 3
        0x00EE, // 0x20E RET
    ]);
    run(&mut chip8, 2);
    assert_eq!(chip8.stack(), &[0x200, 0x206]);
    run(&mut chip8, 2);
    assert_eq!(chip8.pc(), 0x208);
    run(&mut chip8, 2);
    assert_eq!(chip8.pc(), 0x202);
    assert!(chip8.stack().is_empty());
    run(&mut chip8, 1);
    assert_eq!(&chip8.registers()[1..4], &[1, 2, 3]);
}

#[test]
fn test_deep_recursion_unwinds() {
    let mut chip8 = boot(&[
        0x7001, // 0x200 ADD V0, 1
        0x3040, // 0x202 SE V0, 64
        0x2200, // 0x204 CALL 0x200
        0x00EE, // 0x206 RET
    ]);
    // 64 frames deep, well past the traditional 16 entry stack
    while chip8.registers()[0x0] < 64 || chip8.pc() != 0x206 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.stack().len(), 63);
    while !chip8.stack().is_empty() {
        chip8.step().unwrap();
    }
    // the last RET returns past the outermost CALL back into the RET itself
    assert_eq!(chip8.pc(), 0x206);
    assert!(matches!(
        chip8.step(),
        Err(Error::StackUnderflow { pc: 0x206 })
    ));
}

#[test]
fn test_draws_bcd_digits_with_glyphs() {
    let mut chip8 = boot(&[
        0x6A7B, // LD VA, 123
        0xA300, // LD I, 0x300
        0xFA33, // LD B, VA
        0xF265, // LD V2, [I]
        0xF129, // LD F, V1 (tens digit)
        0xD225, // DRW V2, V2, 5
    ]);
    run(&mut chip8, 6);
    assert_eq!(&chip8.registers()[0..3], &[1, 2, 3]);
    assert_eq!(chip8.i(), 2 * 5);
    let pixels = chip8.frame_buffer().pixels();
    // glyph for 2, drawn at (3, 3)
    assert_eq!(pixels[3][3..7], [1, 1, 1, 1]);
    assert_eq!(pixels[4][3..7], [0, 0, 0, 1]);
    assert_eq!(pixels[5][3..7], [1, 1, 1, 1]);
    assert_eq!(pixels[6][3..7], [1, 0, 0, 0]);
    assert_eq!(pixels[7][3..7], [1, 1, 1, 1]);
    assert_eq!(pixels[2][3..7], [0, 0, 0, 0]);
    assert_eq!(chip8.registers()[0xF], 0);
}

#[test]
fn test_legacy_quirks() {
    let program: Vec<u8> = [0x6A7B_u16, 0xA300, 0xFA33, 0x6181, 0x810E]
        .iter()
        .flat_map(|op| op.to_be_bytes())
        .collect();
    let mut chip8 = Chip8::with_quirks(Quirks::legacy());
    chip8.load_program(&program).unwrap();
    run(&mut chip8, 5);
    assert_eq!(chip8.memory()[0x300..0x303], [3, 0, 0]);
    assert_eq!(chip8.registers()[0x1], 0x02);
    assert_eq!(chip8.registers()[0xF], 0x81);
}

#[test]
fn test_key_skips() {
    let mut chip8 = boot(&[
        0x6405, // 0x200 LD V4, 5
        0xE49E, // 0x202 SKP V4
        0x1202, // 0x204 JP 0x202
        0xE4A1, // 0x206 SKNP V4
        0x1206, // 0x208 JP 0x206
        0x120A, // 0x20A JP 0x20A
    ]);
    run(&mut chip8, 5);
    assert_eq!(chip8.pc(), 0x202);
    chip8.key_press(0x5);
    run(&mut chip8, 2);
    assert_eq!(chip8.pc(), 0x208);
    run(&mut chip8, 2);
    assert_eq!(chip8.pc(), 0x208);
    chip8.key_release(0x5);
    run(&mut chip8, 2);
    assert_eq!(chip8.pc(), 0x20A);
}

#[test]
fn test_reset_then_reload_runs_clean() {
    let program = [0x6A, 0x01, 0x7A, 0x01];
    let mut chip8 = Chip8::new();
    chip8.load_program(&program).unwrap();
    run(&mut chip8, 2);
    assert_eq!(chip8.registers()[0xA], 2);
    chip8.reset();
    chip8.load_program(&program).unwrap();
    run(&mut chip8, 2);
    assert_eq!(chip8.registers()[0xA], 2);
}

#[test]
fn test_random_is_reproducible() {
    let program = [0xC0FF_u16, 0xC1FF, 0xC2FF, 0xC3FF];
    let mut a = boot(&program);
    let mut b = boot(&program);
    run(&mut a, 4);
    run(&mut b, 4);
    assert_eq!(a.registers(), b.registers());
}
