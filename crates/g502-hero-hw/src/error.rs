//! Error types for the G502 Hero hardware library.

use thiserror::Error;

use crate::protocol::Mode;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interacting with the hardware.
#[derive(Error, Debug)]
pub enum Error {
    /// No G502 Hero found or the device could not be opened.
    #[error("G502 Hero not found (VID:PID 046D:C08B)")]
    DeviceNotFound,

    /// USB HID communication error.
    #[error("USB HID error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// Unknown lighting channel name.
    #[error("invalid channel {0:?}, must be one of (\"dpi\", \"logo\")")]
    InvalidChannel(String),

    /// Unknown lighting mode name.
    #[error("invalid mode {0:?}, must be one of (\"off\", \"fixed\", \"breathing\", \"rainbow\")")]
    InvalidMode(String),

    /// Wrong number of colors for a mode that takes exactly one.
    #[error("{mode} mode takes exactly one color, got {given}")]
    ColorCount { mode: Mode, given: usize },

    /// Color string is not six hex digits.
    #[error("invalid color {0:?}, expected RRGGBB hex")]
    InvalidColor(String),

    /// Operation the device firmware has no support for.
    #[error("{0} not supported by this device")]
    NotSupported(&'static str),

    /// Runtime storage I/O error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Runtime storage encoding error.
    #[error("storage encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
