use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Error, Result};
use log::{debug, info};
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use emu8_core::{Chip8, Quirks};
use emu8_display::Display;

use crate::clock::Clock;
use crate::keymap::keymap;
use crate::sound::{Beeper, Mute, Sound};

/// Everything needed to start a session.
pub struct Config {
    pub rom: PathBuf,
    pub frequency: u32,
    pub scale: u32,
    pub mute: bool,
    pub quirks: Quirks,
}

pub fn run(config: Config) -> Result<()> {
    let mut chip8 = Chip8::with_quirks(config.quirks);

    // Get SDL2 context
    let sdl = sdl2::init().map_err(Error::msg)?;
    let mut display = Display::new(&sdl, config.scale)?;
    let mut sound: Box<dyn Sound> = if config.mute {
        Box::new(Mute)
    } else {
        Box::new(Beeper::new(&sdl)?)
    };
    let mut events = sdl.event_pump().map_err(Error::msg)?;

    // Load ROM, keeping it around for restarts
    let rom = std::fs::read(&config.rom)
        .with_context(|| format!("unable to open {}", config.rom.display()))?;
    chip8
        .load_program(&rom)
        .with_context(|| format!("unable to load {}", config.rom.display()))?;
    info!("loaded {} ({} bytes)", config.rom.display(), rom.len());
    debug!("{:?}", chip8.quirks());

    let mut clock = Clock::new(config.frequency);
    let cycle_time = clock.cycle_time();
    let mut last_cycle = Instant::now();

    // Whether or not the configured clock speed should be respected
    let mut fast_forward = false;
    // Whether the cpu and timers are frozen
    let mut paused = false;

    'event: loop {
        if let Some(frame) = chip8.take_frame() {
            display.render(frame)?;
        }

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::P, _) => {
                        paused = !paused;
                        sound.set_beeping(!paused && chip8.is_beeping());
                        info!("{}", if paused { "paused" } else { "resumed" });
                    }
                    (Keycode::Backspace, _) => {
                        restart(&mut chip8, &rom)?;
                        sound.set_beeping(false);
                        info!("restarted {}", config.rom.display());
                    }
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                // key up events are lost while unfocused
                Event::Window {
                    win_event: WindowEvent::FocusLost,
                    ..
                } => chip8.keyboard_mut().clear(),
                _ => continue,
            };
        }

        // Update state
        if !paused {
            step(&mut chip8)?;
            if clock.cycle() {
                chip8.tick();
                sound.set_beeping(chip8.is_beeping());
            }
        }

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if (paused || !fast_forward) && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    info!("exiting");
    Ok(())
}

/// Runs one instruction, naming the address a failure happened at.
fn step(chip8: &mut Chip8) -> Result<()> {
    let pc = chip8.pc();
    chip8
        .step()
        .with_context(|| format!("halted at {:#06X}", pc))
}

/// Puts the machine back to power-on and loads the same ROM again.
fn restart(chip8: &mut Chip8, rom: &[u8]) -> emu8_core::Result<()> {
    chip8.reset();
    chip8.load_program(rom)
}
