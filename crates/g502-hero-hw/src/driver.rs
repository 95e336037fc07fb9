//! Uniform driver interface.
//!
//! Front ends that manage a mix of devices call every driver through the
//! same surface; entry points a device cannot honor still exist and answer
//! for themselves.

use crate::device::ConnectedG502Hero;
use crate::protocol::{Channel, Mode, Rgb};
use crate::{Error, Result};

/// One reading reported by a device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusEntry {
    pub property: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Driver surface shared by all supported devices.
pub trait Driver {
    /// One-line human readable device name.
    fn description(&self) -> &str;

    /// Puts the device into a known state after power-on or resume.
    fn initialize(&mut self, pump_mode: Option<&str>) -> Result<Vec<StatusEntry>>;

    /// Reads a status report.
    fn status(&mut self) -> Result<Vec<StatusEntry>>;

    /// Sets a cooling channel to a fixed duty.
    fn set_fixed_speed(&mut self, channel: &str, duty: u8) -> Result<()>;

    /// Sets a cooling channel to follow a (temperature, duty) curve.
    fn set_speed_profile(&mut self, channel: &str, profile: &[(u8, u8)]) -> Result<()>;

    /// Sets the color of a lighting zone.
    fn set_color(
        &mut self,
        channel: Channel,
        mode: Mode,
        colors: &[Rgb],
        unsafe_flags: &[&str],
    ) -> Result<()>;
}

impl Driver for ConnectedG502Hero {
    fn description(&self) -> &str {
        ConnectedG502Hero::description(self)
    }

    /// No known initialization sequence yet; kept so the device answers the
    /// uniform surface. Returns no readings.
    fn initialize(&mut self, _pump_mode: Option<&str>) -> Result<Vec<StatusEntry>> {
        Ok(Vec::new())
    }

    /// The firmware exposes no readable sensors over this interface.
    fn status(&mut self) -> Result<Vec<StatusEntry>> {
        Ok(Vec::new())
    }

    fn set_fixed_speed(&mut self, _channel: &str, _duty: u8) -> Result<()> {
        Err(Error::NotSupported("fan and pump speed control"))
    }

    fn set_speed_profile(&mut self, _channel: &str, _profile: &[(u8, u8)]) -> Result<()> {
        Err(Error::NotSupported("fan and pump speed control"))
    }

    fn set_color(
        &mut self,
        channel: Channel,
        mode: Mode,
        colors: &[Rgb],
        _unsafe_flags: &[&str],
    ) -> Result<()> {
        ConnectedG502Hero::set_color(self, channel, mode, colors)
    }
}
