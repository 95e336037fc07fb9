//! Lighting protocol definitions and encoding.
//!
//! Report structure:
//! - Buffer size: 21 bytes (1 report byte + 20 payload bytes)
//! - Header bytes: 0x11 (report kind), 0xFF (feature page), 0x02 (sub-id),
//!   0x3A (set-color command)
//! - Payload: channel, mode, red, green, blue, then a flag byte that is
//!   only set for the fixed mode

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Payload length of one report, excluding the report byte.
pub const REPORT_LENGTH: usize = 20;

/// Total buffer size including the report byte.
pub const BUFFER_SIZE: usize = REPORT_LENGTH + 1;

/// Report kind byte (long HID++ report).
pub const REPORT_KIND: u8 = 0x11;

/// Vendor feature page.
pub const FEATURE_PAGE: u8 = 0xFF;

/// Feature sub-id.
pub const SUB_ID: u8 = 0x02;

/// Set-color command byte.
pub const CMD_SET_COLOR: u8 = 0x3A;

/// Flag written at offset 10 for `Mode::Fixed` only. Undocumented by the
/// vendor; the firmware ignores the command without it.
pub const FIXED_MODE_FLAG: u8 = 0x02;

/// Addressable lighting zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    /// DPI indicator lights on the left side.
    Dpi = 0x00,
    /// Logo light under the palm rest.
    Logo = 0x01,
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dpi" => Ok(Channel::Dpi),
            "logo" => Ok(Channel::Logo),
            _ => Err(Error::InvalidChannel(s.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Dpi => write!(f, "dpi"),
            Channel::Logo => write!(f, "logo"),
        }
    }
}

/// Lighting effect modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Mode {
    /// Lights off.
    #[default]
    Off = 0x00,
    /// Solid color.
    Fixed = 0x01,
    /// Pulsing single color.
    Breathing = 0x02,
    /// Firmware-driven color cycle.
    Rainbow = 0x03,
}

impl Mode {
    /// Modes that take exactly one color.
    pub fn needs_color(self) -> bool {
        matches!(self, Mode::Fixed | Mode::Breathing)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Mode::Off),
            "fixed" => Ok(Mode::Fixed),
            "breathing" => Ok(Mode::Breathing),
            "rainbow" => Ok(Mode::Rainbow),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Off => write!(f, "off"),
            Mode::Fixed => write!(f, "fixed"),
            Mode::Breathing => write!(f, "breathing"),
            Mode::Rainbow => write!(f, "rainbow"),
        }
    }
}

/// RGB color. Components are `u8`, so the full wire range is representable
/// and nothing out of range can reach the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let value =
            u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;

        Ok(Rgb {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Builds a set-color report.
///
/// Fixed and breathing take exactly one color; the other modes use the
/// first color if any are given and fall back to black.
pub fn build_color_report(
    channel: Channel,
    mode: Mode,
    colors: &[Rgb],
) -> Result<[u8; BUFFER_SIZE]> {
    if mode.needs_color() && colors.len() != 1 {
        return Err(Error::ColorCount {
            mode,
            given: colors.len(),
        });
    }

    let color = colors.first().copied().unwrap_or(Rgb::BLACK);

    let mut buffer = [0u8; BUFFER_SIZE];
    // Index 0 is the HID report number; the device uses unnumbered reports.
    buffer[1] = REPORT_KIND;
    buffer[2] = FEATURE_PAGE;
    buffer[3] = SUB_ID;
    buffer[4] = CMD_SET_COLOR;
    buffer[5] = channel as u8;
    buffer[6] = mode as u8;
    buffer[7] = color.r;
    buffer[8] = color.g;
    buffer[9] = color.b;

    if mode == Mode::Fixed {
        buffer[10] = FIXED_MODE_FLAG;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes() {
        for channel in [Channel::Dpi, Channel::Logo] {
            for mode in [Mode::Off, Mode::Rainbow] {
                let report = build_color_report(channel, mode, &[]).unwrap();
                assert_eq!(report.len(), BUFFER_SIZE);
                assert_eq!(report[1..5], [0x11, 0xFF, 0x02, 0x3A]);
            }
        }
    }

    #[test]
    fn test_fixed_report() {
        let report =
            build_color_report(Channel::Dpi, Mode::Fixed, &[Rgb::new(10, 20, 30)]).unwrap();
        assert_eq!(report[5], 0x00); // dpi
        assert_eq!(report[6], 0x01); // fixed
        assert_eq!(report[7..10], [10, 20, 30]);
        assert_eq!(report[10], FIXED_MODE_FLAG);
    }

    #[test]
    fn test_off_report_defaults_to_black() {
        let report = build_color_report(Channel::Logo, Mode::Off, &[]).unwrap();
        assert_eq!(report[5], 0x01); // logo
        assert_eq!(report[6], 0x00); // off
        assert_eq!(report[7..10], [0, 0, 0]);
        // Flag byte stays clear outside fixed mode
        assert_eq!(report[10], 0x00);
    }

    #[test]
    fn test_breathing_sets_no_flag() {
        let report =
            build_color_report(Channel::Logo, Mode::Breathing, &[Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(report[6], 0x02);
        assert_eq!(report[7..10], [1, 2, 3]);
        assert_eq!(report[10], 0x00);
    }

    #[test]
    fn test_single_color_modes_reject_wrong_count() {
        let two = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        assert!(matches!(
            build_color_report(Channel::Logo, Mode::Breathing, &two),
            Err(Error::ColorCount {
                mode: Mode::Breathing,
                given: 2
            })
        ));
        assert!(matches!(
            build_color_report(Channel::Dpi, Mode::Fixed, &[]),
            Err(Error::ColorCount {
                mode: Mode::Fixed,
                given: 0
            })
        ));
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!("dpi".parse::<Channel>().unwrap(), Channel::Dpi);
        assert_eq!("DPI".parse::<Channel>().unwrap(), Channel::Dpi);
        assert_eq!("Logo".parse::<Channel>().unwrap(), Channel::Logo);
        assert!(matches!(
            "wheel".parse::<Channel>(),
            Err(Error::InvalidChannel(_))
        ));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("FIXED".parse::<Mode>().unwrap(), Mode::Fixed);
        assert_eq!("rainbow".parse::<Mode>().unwrap(), Mode::Rainbow);
        assert!(matches!("pulse".parse::<Mode>(), Err(Error::InvalidMode(_))));
    }

    #[test]
    fn test_rgb_from_str() {
        assert_eq!("0a141e".parse::<Rgb>().unwrap(), Rgb::new(10, 20, 30));
        assert_eq!("#0A141E".parse::<Rgb>().unwrap(), Rgb::new(10, 20, 30));
        assert!("0a141".parse::<Rgb>().is_err());
        assert!("nothex".parse::<Rgb>().is_err());
        assert_eq!(Rgb::new(255, 0, 128).to_string(), "ff0080");
    }
}
