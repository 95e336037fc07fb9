//! G502 Hero device communication via USB HID.

use std::ffi::CString;

use hidapi::{HidApi, HidDevice};
use tracing::{debug, info};

use crate::identity::StorageKey;
use crate::protocol::{self, Channel, Mode, Rgb, REPORT_LENGTH};
use crate::storage::RuntimeStorage;
use crate::{Error, Result, PRODUCT_ID, VENDOR_ID};

/// Human readable device name.
const DESCRIPTION: &str = "Logitech G502 Hero (experimental)";

/// A G502 Hero found on the bus but not opened yet.
///
/// Discovery and connection are separate steps; the storage identity only
/// exists on a [`ConnectedG502Hero`].
pub struct G502Hero {
    path: CString,
    address: String,
    vendor_id: u16,
    product_id: u16,
}

impl G502Hero {
    /// Finds the first G502 Hero on the bus.
    pub fn find(api: &HidApi) -> Result<Self> {
        Self::find_all(api).into_iter().next().ok_or(Error::DeviceNotFound)
    }

    /// Finds every G502 Hero on the bus.
    pub fn find_all(api: &HidApi) -> Vec<Self> {
        api.device_list()
            .filter(|dev| dev.vendor_id() == VENDOR_ID && dev.product_id() == PRODUCT_ID)
            .map(|dev| {
                debug!(
                    "Found HID device: path={:?}, interface={}",
                    dev.path(),
                    dev.interface_number()
                );
                Self {
                    path: dev.path().to_owned(),
                    address: dev.path().to_string_lossy().into_owned(),
                    vendor_id: dev.vendor_id(),
                    product_id: dev.product_id(),
                }
            })
            .collect()
    }

    /// Platform HID path the device was enumerated at.
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Opens the HID device and derives the storage identity.
    pub fn connect(self, api: &HidApi) -> Result<ConnectedG502Hero> {
        let device = api.open_path(&self.path).map_err(|e| {
            debug!("Failed to open device: {}", e);
            Error::DeviceNotFound
        })?;

        let identity = StorageKey::new(self.vendor_id, self.product_id, &self.address);
        let storage = RuntimeStorage::open(&identity)?;

        info!(
            "G502 Hero opened (VID:{:04X} PID:{:04X}, key={}/{})",
            self.vendor_id,
            self.product_id,
            identity.vendor_product(),
            identity.location()
        );

        Ok(ConnectedG502Hero {
            device,
            identity,
            storage,
        })
    }
}

/// An opened G502 Hero with its storage identity.
///
/// Commands take `&mut self`: the drain/write/read sequence is not atomic
/// on the wire, so exactly one caller must hold the handle per command.
pub struct ConnectedG502Hero {
    device: HidDevice,
    identity: StorageKey,
    storage: RuntimeStorage,
}

impl ConnectedG502Hero {
    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    /// Storage namespace derived at connect time.
    pub fn identity(&self) -> &StorageKey {
        &self.identity
    }

    /// Runtime store scoped to this device instance.
    pub fn storage(&self) -> &RuntimeStorage {
        &self.storage
    }

    /// Sets the color of a lighting zone.
    ///
    /// Fixed and breathing take exactly one color; off and rainbow use the
    /// first color if any are given and fall back to black. Animations
    /// beyond what the firmware runs itself require successive calls.
    pub fn set_color(&mut self, channel: Channel, mode: Mode, colors: &[Rgb]) -> Result<()> {
        let report = protocol::build_color_report(channel, mode, colors)?;

        self.clear_enqueued_reports()?;
        self.device.write(&report)?;

        // The reply payload is undocumented; reading it keeps the report
        // queue in sync for the next command.
        let mut response = [0u8; REPORT_LENGTH];
        let read = self.device.read(&mut response)?;
        debug!("Device response ({} bytes): {:02X?}", read, &response[..read]);

        info!("{} set to {}", channel, mode);
        Ok(())
    }

    /// Drains input reports the mouse queued from earlier activity, so the
    /// next read returns the reply to our own command.
    fn clear_enqueued_reports(&mut self) -> Result<()> {
        let mut scratch = [0u8; REPORT_LENGTH];
        loop {
            // Zero timeout returns immediately once the queue is empty
            let read = self.device.read_timeout(&mut scratch, 0)?;
            if read == 0 {
                return Ok(());
            }
            debug!("Discarded stale report ({} bytes)", read);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Driver;

    // Hardware tests are skipped by default
    #[test]
    #[ignore]
    fn test_find_and_connect() {
        let api = HidApi::new().unwrap();
        let mouse = G502Hero::find(&api).unwrap();
        let mut connected = mouse.connect(&api).unwrap();
        connected
            .set_color(Channel::Logo, Mode::Fixed, &[Rgb::new(0, 64, 255)])
            .unwrap();
    }

    #[test]
    #[ignore]
    fn test_driver_surface() {
        let api = HidApi::new().unwrap();
        let mut connected = G502Hero::find(&api).unwrap().connect(&api).unwrap();

        assert!(connected.initialize(None).unwrap().is_empty());
        assert!(connected.status().unwrap().is_empty());
        assert!(matches!(
            connected.set_fixed_speed("fan", 50),
            Err(Error::NotSupported(_))
        ));
        assert!(matches!(
            connected.set_speed_profile("pump", &[(20, 30), (50, 100)]),
            Err(Error::NotSupported(_))
        ));
    }
}
