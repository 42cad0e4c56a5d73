/// # Speaker
///
/// The sound timer and whether a front-end should currently be making a beep.
///
/// `beeping` describes the last tick: it is set when that tick found the timer still running.
#[derive(Clone, Default)]
pub struct Speaker {
    sound_timer: u8,
    beeping: bool,
}

impl Speaker {
    pub fn new() -> Self {
        Speaker {
            sound_timer: 0,
            beeping: false,
        }
    }

    pub fn reset(&mut self) {
        self.sound_timer = 0;
        self.beeping = false;
    }

    pub fn tick(&mut self) {
        if self.sound_timer > 0 {
            self.sound_timer -= 1;
            self.beeping = true;
        } else {
            self.beeping = false;
        }
    }

    pub fn set_sound_timer(&mut self, value: u8) {
        self.sound_timer = value;
    }

    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }

    pub fn is_beeping(&self) -> bool {
        self.beeping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_by_default() {
        let mut speaker = Speaker::new();
        speaker.tick();
        assert!(!speaker.is_beeping());
        assert_eq!(speaker.sound_timer(), 0);
    }

    #[test]
    fn test_beeps_while_counting_down() {
        let mut speaker = Speaker::new();
        speaker.set_sound_timer(3);
        let beeps: Vec<bool> = (0..5)
            .map(|_| {
                speaker.tick();
                speaker.is_beeping()
            })
            .collect();
        assert_eq!(beeps, [true, true, true, false, false]);
        assert_eq!(speaker.sound_timer(), 0);
    }

    #[test]
    fn test_reset() {
        let mut speaker = Speaker::new();
        speaker.set_sound_timer(9);
        speaker.tick();
        speaker.reset();
        assert_eq!(speaker.sound_timer(), 0);
        assert!(!speaker.is_beeping());
    }
}
