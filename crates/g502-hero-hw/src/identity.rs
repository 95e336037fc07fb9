//! Per-device identity used to scope persisted runtime state.

/// Storage namespace for one connected device instance.
///
/// The mouse exposes no serial number, so the identity is derived from the
/// vendor/product IDs plus the numeric parts of the platform HID path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey {
    vendor_product: String,
    location: String,
}

impl StorageKey {
    /// Derives the storage key from the device IDs and its HID path.
    ///
    /// HID paths can be long on Windows and macOS and contain segments that
    /// differ between hosts; the digit runs are the only parts expected to
    /// differ between two devices of the same model, so only those are
    /// kept. An address without any digits degenerates to the literal
    /// `loc`, in which case two unaddressed devices of the same model share
    /// a key.
    pub fn new(vendor_id: u16, product_id: u16, address: &str) -> Self {
        let vendor_product = format!("vid{:04x}_pid{:04x}", vendor_id, product_id);
        let location = format!("loc{}", digit_runs(address).join("_"));
        Self {
            vendor_product,
            location,
        }
    }

    /// The `vid<VVVV>_pid<PPPP>` half of the namespace.
    pub fn vendor_product(&self) -> &str {
        &self.vendor_product
    }

    /// The `loc<digits>` half of the namespace.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Both namespace prefixes, outermost first.
    pub fn prefixes(&self) -> [&str; 2] {
        [&self.vendor_product, &self.location]
    }
}

/// Every maximal run of decimal digits in `address`, in order.
fn digit_runs(address: &str) -> Vec<&str> {
    address
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_hid_path() {
        let key = StorageKey::new(0x046D, 0xC08B, "IOService:/AppleUSB/.../3/4");
        assert_eq!(key.vendor_product(), "vid046d_pidc08b");
        assert_eq!(key.location(), "loc3_4");
        assert_eq!(key.prefixes(), ["vid046d_pidc08b", "loc3_4"]);
    }

    #[test]
    fn test_digit_runs_keep_order() {
        let key = StorageKey::new(0x046D, 0xC08B, "/dev/hidraw12:usb-0000:00:14.0-3");
        assert_eq!(key.location(), "loc12_0000_00_14_0_3");
    }

    #[test]
    fn test_address_without_digits_degenerates() {
        let key = StorageKey::new(0x046D, 0xC08B, "no/numbers/here");
        assert_eq!(key.location(), "loc");
    }
}
