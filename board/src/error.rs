use core::fmt;

use crate::display::Controller;
use crate::pins::{Gpio, PinRole};
use crate::touch::Axis;

/// Which SPI clock setting a frequency belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiClock {
    DisplayWrite,
    DisplayRead,
    Touch,
}

impl fmt::Display for SpiClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpiClock::DisplayWrite => write!(f, "display write"),
            SpiClock::DisplayRead => write!(f, "display read"),
            SpiClock::Touch => write!(f, "touch"),
        }
    }
}

/// A board configuration that cannot be wired or driven as declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    ZeroResolution,
    ResolutionExceedsController {
        controller: Controller,
        width: u16,
        height: u16,
    },
    SpiClockOutOfRange {
        clock: SpiClock,
        hz: u32,
        max: u32,
    },
    InvertedCalibration {
        axis: Axis,
        min: u16,
        max: u16,
    },
    CalibrationOutOfRange {
        axis: Axis,
        max: u16,
    },
    PinUnavailable {
        role: PinRole,
        pin: Gpio,
    },
    PinReserved {
        role: PinRole,
        pin: Gpio,
    },
    PinInputOnly {
        role: PinRole,
        pin: Gpio,
    },
    PinConflict {
        first: PinRole,
        second: PinRole,
        pin: Gpio,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroResolution => write!(f, "Display resolution has a zero dimension"),
            ConfigError::ResolutionExceedsController {
                controller,
                width,
                height,
            } => write!(f, "{width}x{height} does not fit the {controller} frame memory"),
            ConfigError::SpiClockOutOfRange { clock, hz, max } => {
                write!(f, "SPI {clock} clock {hz} Hz is outside 1..={max} Hz")
            }
            ConfigError::InvertedCalibration { axis, min, max } => {
                write!(f, "Touch calibration {axis}: min {min} is not below max {max}")
            }
            ConfigError::CalibrationOutOfRange { axis, max } => {
                write!(f, "Touch calibration {axis}: max {max} exceeds the 12-bit ADC range")
            }
            ConfigError::PinUnavailable { role, pin } => {
                write!(f, "{role} is assigned to {pin}, which does not exist")
            }
            ConfigError::PinReserved { role, pin } => {
                write!(f, "{role} is assigned to {pin}, which is wired to the flash")
            }
            ConfigError::PinInputOnly { role, pin } => {
                write!(f, "{role} needs an output but {pin} is input-only")
            }
            ConfigError::PinConflict { first, second, pin } => {
                write!(f, "{first} and {second} are both assigned to {pin}")
            }
        }
    }
}
