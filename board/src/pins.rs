//! GPIO numbering, pin roles and the host platform's GPIO matrix.

use core::fmt;

/// A GPIO number on the host MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gpio(pub u8);

impl Gpio {
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// The signal a GPIO carries on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    Mosi,
    Miso,
    Sclk,
    DisplayCs,
    DataCommand,
    Reset,
    Backlight,
    TouchCs,
    TouchIrq,
}

impl PinRole {
    /// Whether the MCU drives this signal.
    pub const fn is_output(self) -> bool {
        !matches!(self, PinRole::Miso | PinRole::TouchIrq)
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PinRole::Mosi => "MOSI",
            PinRole::Miso => "MISO",
            PinRole::Sclk => "SCLK",
            PinRole::DisplayCs => "display CS",
            PinRole::DataCommand => "display DC",
            PinRole::Reset => "display reset",
            PinRole::Backlight => "backlight",
            PinRole::TouchCs => "touch CS",
            PinRole::TouchIrq => "touch IRQ",
        };
        f.write_str(name)
    }
}

/// One role and the pin it is wired to. `pin` is `None` when the signal is
/// not connected to the MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub role: PinRole,
    pub pin: Option<Gpio>,
}

impl PinAssignment {
    pub const fn new(role: PinRole, pin: Option<Gpio>) -> Self {
        Self { role, pin }
    }
}

/// GPIO matrix and SPI limits of the MCU the board is built around.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub name: &'static str,
    /// GPIO numbers run from 0 to `gpio_count - 1`.
    pub gpio_count: u8,
    /// Numbers inside the range that have no pad.
    pub absent: &'static [u8],
    /// Pads wired to the on-module flash.
    pub reserved: &'static [u8],
    /// Pads without an output driver.
    pub input_only: &'static [u8],
    /// Pads sampled at reset to select the boot mode.
    pub strapping: &'static [u8],
    pub max_spi_hz: u32,
}

/// ESP32 (original, dual-core Xtensa LX6).
pub const ESP32: Platform = Platform {
    name: "ESP32",
    gpio_count: 40,
    absent: &[20, 24, 28, 29, 30, 31],
    reserved: &[6, 7, 8, 9, 10, 11],
    input_only: &[34, 35, 36, 37, 38, 39],
    strapping: &[0, 2, 5, 12, 15],
    max_spi_hz: 80_000_000,
};

impl Platform {
    /// The pad exists on the package.
    pub const fn has_pin(&self, pin: Gpio) -> bool {
        pin.0 < self.gpio_count && !contains(self.absent, pin.0)
    }

    pub const fn is_reserved(&self, pin: Gpio) -> bool {
        contains(self.reserved, pin.0)
    }

    pub const fn is_input_only(&self, pin: Gpio) -> bool {
        contains(self.input_only, pin.0)
    }

    pub const fn is_strapping(&self, pin: Gpio) -> bool {
        contains(self.strapping, pin.0)
    }
}

const fn contains(list: &[u8], value: u8) -> bool {
    let mut i = 0;
    while i < list.len() {
        if list[i] == value {
            return true;
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn test_esp32_pin_matrix() {
        assert!(ESP32.has_pin(Gpio(0)));
        assert!(ESP32.has_pin(Gpio(39)));
        assert!(!ESP32.has_pin(Gpio(40)));
        assert!(!ESP32.has_pin(Gpio(24)));
        assert!(ESP32.is_reserved(Gpio(6)));
        assert!(!ESP32.is_reserved(Gpio(13)));
        assert!(ESP32.is_input_only(Gpio(36)));
        assert!(!ESP32.is_input_only(Gpio(33)));
        assert!(ESP32.is_strapping(Gpio(2)));
        assert!(ESP32.is_strapping(Gpio(15)));
        assert!(!ESP32.is_strapping(Gpio(27)));
    }

    #[test]
    fn test_output_roles() {
        assert!(PinRole::Mosi.is_output());
        assert!(PinRole::TouchCs.is_output());
        assert!(PinRole::Backlight.is_output());
        assert!(!PinRole::Miso.is_output());
        assert!(!PinRole::TouchIrq.is_output());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Gpio(36)), "GPIO36");
        assert_eq!(format!("{}", PinRole::DataCommand), "display DC");
        assert_eq!(format!("{}", PinRole::TouchIrq), "touch IRQ");
    }
}
