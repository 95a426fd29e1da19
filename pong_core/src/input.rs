//! Input signals consumed by the simulation
//!
//! The core only sees semantic signals. Hosts translate their own key
//! events; the `*_key_code` helpers cover the classic arrow/escape/enter
//! layout for hosts that want it.

/// Key codes of the default layout
pub const KEY_UP: u32 = 38;
pub const KEY_DOWN: u32 = 40;
pub const KEY_ESCAPE: u32 = 27;
pub const KEY_ENTER: u32 = 13;

/// Level-triggered paddle controls, held for as long as the key is down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a key press or release. Returns false for keys that are
    /// not paddle controls.
    pub fn apply_key_code(&mut self, code: u32, pressed: bool) -> bool {
        match code {
            KEY_UP => self.up = pressed,
            KEY_DOWN => self.down = pressed,
            _ => return false,
        }
        true
    }
}

/// Edge-triggered match controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Pause or resume play
    Pause,
    /// Resume from pause, or start a new match after game over
    Confirm,
}

impl Signal {
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_ESCAPE => Some(Signal::Pause),
            KEY_ENTER => Some(Signal::Confirm),
            _ => None,
        }
    }
}
