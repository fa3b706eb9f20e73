use thiserror::Error;

/// Errors raised while decoding keyboard samples.
///
/// Failures inside an [`InputSource`](crate::InputSource) are never caught
/// or translated here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardError {
    /// The base key is neither a named key nor a usable character.
    #[error("invalid key code {code:#x}")]
    InvalidKeyCode { code: i32 },
}

pub type Result<T> = std::result::Result<T, KeyboardError>;
