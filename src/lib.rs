pub mod error;
pub mod key;
pub mod keyboard;
pub mod traits;

pub use crate::error::{KeyboardError, Result};
pub use crate::key::{
    KeyCode, KeyEvent, MODIFIER_LABELS, Modifiers, NAMED_KEYS, NamedKey, codes, decode,
};
pub use crate::keyboard::{Keyboard, KeyboardBuilder};
pub use crate::traits::InputSource;
