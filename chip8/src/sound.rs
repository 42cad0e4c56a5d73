use anyhow::{Error, Result};
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Turns the interpreter's "is beeping" flag into something audible.
pub trait Sound {
    fn set_beeping(&mut self, beeping: bool);
}

const BEEP_PITCH: f32 = 440.0;
const BEEP_VOLUME: f32 = 0.25;
const SAMPLE_RATE: i32 = 44_100;

/// A square wave generator fed to SDL's audio thread.
struct SquareWave {
    phase_inc: f32,
    phase: f32,
    volume: f32,
}

impl AudioCallback for SquareWave {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.phase <= 0.5 {
                self.volume
            } else {
                -self.volume
            };
            self.phase = (self.phase + self.phase_inc) % 1.0;
        }
    }
}

/// Beeps through the default SDL2 audio device.
pub struct Beeper {
    device: AudioDevice<SquareWave>,
    beeping: bool,
}

impl Beeper {
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self> {
        let audio_subsystem = sdl.audio().map_err(Error::msg)?;
        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem
            .open_playback(None, &desired, |spec| SquareWave {
                phase_inc: BEEP_PITCH / spec.freq as f32,
                phase: 0.0,
                volume: BEEP_VOLUME,
            })
            .map_err(Error::msg)?;

        Ok(Beeper {
            device,
            beeping: false,
        })
    }
}

impl Sound for Beeper {
    fn set_beeping(&mut self, beeping: bool) {
        if beeping == self.beeping {
            return;
        }
        if beeping {
            self.device.resume();
        } else {
            self.device.pause();
        }
        self.beeping = beeping;
    }
}

/// Silence, for `--mute` or machines without audio.
pub struct Mute;

impl Sound for Mute {
    fn set_beeping(&mut self, _beeping: bool) {}
}
