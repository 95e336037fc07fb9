//! G502 Hero Hardware Library
//!
//! Provides lighting control for the Logitech G502 Hero gaming mouse over
//! its vendor-specific USB HID interface, plus the per-device identity used
//! to scope persisted runtime state.

pub mod device;
pub mod driver;
pub mod error;
pub mod identity;
pub mod protocol;
pub mod storage;

pub use device::{ConnectedG502Hero, G502Hero};
pub use driver::{Driver, StatusEntry};
pub use error::{Error, Result};
pub use identity::StorageKey;
pub use protocol::{Channel, Mode, Rgb};
pub use storage::RuntimeStorage;

/// USB VID:PID for the G502 Hero
pub const VENDOR_ID: u16 = 0x046D;
pub const PRODUCT_ID: u16 = 0xC08B;
