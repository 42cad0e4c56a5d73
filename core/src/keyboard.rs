use log::warn;

/// Number of keys on the hex keypad.
pub const KEY_COUNT: u8 = 16;

/// # Keyboard
///
/// The set of currently pressed keys of the hex keypad, 0x0..0xF.
///
/// Keys are kept in the order they were pressed; holding a key down and pressing it again
/// doesn't move it. The most recently pressed key is therefore the last one still held.
#[derive(Clone, Default)]
pub struct Keyboard {
    pressed: Vec<u8>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard {
            pressed: Vec::with_capacity(KEY_COUNT as usize),
        }
    }

    /// Marks `key` as pressed. Keys outside of the keypad are ignored.
    pub fn press(&mut self, key: u8) {
        if key >= KEY_COUNT {
            warn!("ignoring press of unknown key {:#04X}", key);
            return;
        }
        if !self.is_pressed(key) {
            self.pressed.push(key);
        }
    }

    pub fn release(&mut self, key: u8) {
        self.pressed.retain(|&k| k != key);
    }

    /// Releases every key.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed.contains(&key)
    }

    pub fn most_recently_pressed(&self) -> Option<u8> {
        self.pressed.last().copied()
    }
}
