use std::fmt;

use crate::error::{KeyboardError, Result};

/// Raw key-code constants of the simulator keyboard protocol.
///
/// A sampled code packs a base key (masked by [`KEY`](codes::KEY)) with
/// modifier bits above it. These values must match the simulator verbatim.
pub mod codes {
    pub const END: i32 = 312;
    pub const HOME: i32 = 313;
    pub const LEFT: i32 = 314;
    pub const UP: i32 = 315;
    pub const RIGHT: i32 = 316;
    pub const DOWN: i32 = 317;
    pub const PAGEUP: i32 = 366;
    pub const PAGEDOWN: i32 = 367;
    pub const NUMPAD_HOME: i32 = 375;
    pub const NUMPAD_LEFT: i32 = 376;
    pub const NUMPAD_UP: i32 = 377;
    pub const NUMPAD_RIGHT: i32 = 378;
    pub const NUMPAD_DOWN: i32 = 379;
    pub const NUMPAD_END: i32 = 382;

    /// Isolates the base-key bits of a raw code.
    pub const KEY: i32 = 0x0000_ffff;
    pub const SHIFT: i32 = 0x0001_0000;
    pub const CONTROL: i32 = 0x0002_0000;
    pub const ALT: i32 = 0x0004_0000;

    /// Returned by the simulator when no key is held.
    pub const NO_KEY: i32 = -1;
}

/// Non-printable keys reported with a reserved base code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedKey {
    End,
    Home,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    NumpadEnd,
    NumpadHome,
    NumpadLeft,
    NumpadRight,
    NumpadUp,
    NumpadDown,
}

/// Named keys in lookup precedence order. The first entry whose code equals
/// the masked base wins.
pub const NAMED_KEYS: [(i32, NamedKey); 14] = [
    (codes::END, NamedKey::End),
    (codes::HOME, NamedKey::Home),
    (codes::LEFT, NamedKey::Left),
    (codes::RIGHT, NamedKey::Right),
    (codes::UP, NamedKey::Up),
    (codes::DOWN, NamedKey::Down),
    (codes::PAGEUP, NamedKey::PageUp),
    (codes::PAGEDOWN, NamedKey::PageDown),
    (codes::NUMPAD_END, NamedKey::NumpadEnd),
    (codes::NUMPAD_HOME, NamedKey::NumpadHome),
    (codes::NUMPAD_LEFT, NamedKey::NumpadLeft),
    (codes::NUMPAD_RIGHT, NamedKey::NumpadRight),
    (codes::NUMPAD_UP, NamedKey::NumpadUp),
    (codes::NUMPAD_DOWN, NamedKey::NumpadDown),
];

impl NamedKey {
    /// Looks up the named key for a masked base code.
    pub fn from_code(code: i32) -> Option<NamedKey> {
        NAMED_KEYS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, key)| *key)
    }

    /// The simulator base code for this key.
    pub fn code(self) -> i32 {
        match self {
            NamedKey::End => codes::END,
            NamedKey::Home => codes::HOME,
            NamedKey::Left => codes::LEFT,
            NamedKey::Right => codes::RIGHT,
            NamedKey::Up => codes::UP,
            NamedKey::Down => codes::DOWN,
            NamedKey::PageUp => codes::PAGEUP,
            NamedKey::PageDown => codes::PAGEDOWN,
            NamedKey::NumpadEnd => codes::NUMPAD_END,
            NamedKey::NumpadHome => codes::NUMPAD_HOME,
            NamedKey::NumpadLeft => codes::NUMPAD_LEFT,
            NamedKey::NumpadRight => codes::NUMPAD_RIGHT,
            NamedKey::NumpadUp => codes::NUMPAD_UP,
            NamedKey::NumpadDown => codes::NUMPAD_DOWN,
        }
    }

    /// Lowercase, space-separated label, e.g. `"page up"`.
    pub fn label(self) -> &'static str {
        match self {
            NamedKey::End => "end",
            NamedKey::Home => "home",
            NamedKey::Left => "left",
            NamedKey::Right => "right",
            NamedKey::Up => "up",
            NamedKey::Down => "down",
            NamedKey::PageUp => "page up",
            NamedKey::PageDown => "page down",
            NamedKey::NumpadEnd => "numpad end",
            NamedKey::NumpadHome => "numpad home",
            NamedKey::NumpadLeft => "numpad left",
            NamedKey::NumpadRight => "numpad right",
            NamedKey::NumpadUp => "numpad up",
            NamedKey::NumpadDown => "numpad down",
        }
    }
}

/// The base key of a sampled code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyCode {
    /// A reserved non-printable key.
    Named(NamedKey),
    /// Any other base code, read as a Unicode scalar value. The simulator
    /// reports letters in uppercase regardless of SHIFT.
    Char(char),
}

bitflags::bitflags! {
    /// Modifier bits packed above the base key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: i32 {
        const SHIFT   = codes::SHIFT;
        const CONTROL = codes::CONTROL;
        const ALT     = codes::ALT;
    }
}

/// Modifier labels in the order they are rendered.
pub const MODIFIER_LABELS: [(Modifiers, &str); 3] = [
    (Modifiers::SHIFT, "shift"),
    (Modifiers::CONTROL, "control"),
    (Modifiers::ALT, "alt"),
];

/// One decoded keyboard sample.
///
/// Formats as the modifier labels (each followed by `-`) and then the
/// key label, e.g. `shift-page up` or `control-alt-A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the sample.
    pub mods: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self { code, mods }
    }

    /// Splits a raw sampled code into modifiers and base key.
    ///
    /// Named keys take precedence over characters. A base of zero, a
    /// surrogate, or a negative raw code is rejected with
    /// [`KeyboardError::InvalidKeyCode`].
    pub fn from_raw(raw: i32) -> Result<KeyEvent> {
        if raw < 0 {
            return Err(KeyboardError::InvalidKeyCode { code: raw });
        }
        let mods = Modifiers::from_bits_truncate(raw);
        let base = raw & codes::KEY;

        let code = match NamedKey::from_code(base) {
            Some(named) => KeyCode::Named(named),
            None => {
                // `base` is at most 0xFFFF, so only NUL and surrogates fail here
                let ch = char::from_u32(base as u32)
                    .filter(|c| *c != '\0')
                    .ok_or(KeyboardError::InvalidKeyCode { code: raw })?;
                KeyCode::Char(ch)
            }
        };

        Ok(KeyEvent { code, mods })
    }

    /// Re-packs this event into a raw code.
    ///
    /// Returns `None` for characters outside the base-key mask.
    pub fn raw(&self) -> Option<i32> {
        let base = match self.code {
            KeyCode::Named(named) => named.code(),
            KeyCode::Char(ch) => {
                let value = ch as u32;
                if value > codes::KEY as u32 {
                    return None;
                }
                value as i32
            }
        };
        Some(base | self.mods.bits())
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, label) in MODIFIER_LABELS {
            if self.mods.contains(flag) {
                write!(f, "{label}-")?;
            }
        }
        match self.code {
            KeyCode::Named(named) => f.write_str(named.label()),
            KeyCode::Char(ch) => write!(f, "{ch}"),
        }
    }
}

/// Decodes a raw code straight to its label.
pub fn decode(raw: i32) -> Result<String> {
    KeyEvent::from_raw(raw).map(|event| event.to_string())
}
