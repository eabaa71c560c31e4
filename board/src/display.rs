//! TFT display configuration
//!
//! Everything the display driver needs at init: controller model, panel
//! geometry, SPI and control pins, the font resources to link in and the bus
//! clocks.

use core::fmt;

use bitflags::bitflags;
use embedded_graphics_core::geometry::Size;

use crate::error::{ConfigError, SpiClock};
use crate::pins::{Gpio, Platform};

/// Display controller model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    St7789,
}

impl Controller {
    /// Size of the controller's frame memory in native orientation.
    pub const fn frame_memory(self) -> Resolution {
        match self {
            Controller::St7789 => Resolution::new(240, 320),
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::St7789 => write!(f, "ST7789"),
        }
    }
}

/// Panel size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    pub width: u16,
    pub height: u16,
}

impl Resolution {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    const fn fits_within(self, other: Resolution) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Display rotation, clockwise from the panel's native portrait frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const fn is_landscape(self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }

    /// Logical resolution seen after rotating a panel of `native` size.
    pub const fn oriented(self, native: Resolution) -> Resolution {
        if self.is_landscape() {
            Resolution::new(native.height, native.width)
        } else {
            native
        }
    }
}

/// Subpixel order of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

bitflags! {
    /// Font resources linked into the firmware.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Fonts: u8 {
        /// Adafruit 5x7 GLCD font
        const GLCD = 1 << 0;
        /// 16 pixel high font
        const FONT2 = 1 << 1;
        /// 26 pixel high font
        const FONT4 = 1 << 2;
        /// 48 pixel numerals
        const FONT6 = 1 << 3;
        /// 48 pixel seven-segment numerals
        const FONT7 = 1 << 4;
        /// 75 pixel numerals
        const FONT8 = 1 << 5;
        /// FreeFonts (GFX free font format)
        const GFXFF = 1 << 6;
        /// Anti-aliased fonts loaded from flash
        const SMOOTH = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fonts {
    fn format(&self, f: defmt::Formatter) {
        self.iter_names().for_each(|name| {
            defmt::write!(f, "{} ", name.0);
        });
    }
}

/// SPI and control lines of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayPins {
    pub mosi: Gpio,
    /// `None` for write-only wiring.
    pub miso: Option<Gpio>,
    pub sclk: Gpio,
    pub cs: Gpio,
    pub dc: Gpio,
    /// `None` when reset is tied to the MCU reset or held high.
    pub reset: Option<Gpio>,
    pub backlight: Gpio,
}

/// Bus clocks while the display is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiClocks {
    pub write_hz: u32,
    pub read_hz: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub controller: Controller,
    /// Panel size in native orientation.
    pub resolution: Resolution,
    pub rotation: Rotation,
    pub invert_colors: bool,
    pub color_order: ColorOrder,
    pub pins: DisplayPins,
    pub fonts: Fonts,
    pub spi: SpiClocks,
}

impl DisplayConfig {
    /// Resolution after applying the configured rotation.
    pub const fn logical_resolution(&self) -> Resolution {
        self.rotation.oriented(self.resolution)
    }

    /// Checks geometry and clocks. Pins are checked board-wide.
    pub const fn validate(&self, platform: &Platform) -> Result<(), ConfigError> {
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(ConfigError::ZeroResolution);
        }
        if !self.resolution.fits_within(self.controller.frame_memory()) {
            return Err(ConfigError::ResolutionExceedsController {
                controller: self.controller,
                width: self.resolution.width,
                height: self.resolution.height,
            });
        }
        if let Err(e) = check_clock(SpiClock::DisplayWrite, self.spi.write_hz, platform) {
            return Err(e);
        }
        check_clock(SpiClock::DisplayRead, self.spi.read_hz, platform)
    }
}

pub(crate) const fn check_clock(
    clock: SpiClock,
    hz: u32,
    platform: &Platform,
) -> Result<(), ConfigError> {
    if hz == 0 || hz > platform.max_spi_hz {
        return Err(ConfigError::SpiClockOutOfRange {
            clock,
            hz,
            max: platform.max_spi_hz,
        });
    }
    Ok(())
}
