//! Display hardware initialization module
//!
//! This module handles the initialization of the ST7789 display controller
//! via SPI and the backlight control pin.

use board::display::{self, DisplayConfig};
use board::pins::PinRole;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO13, GPIO14, GPIO15, GPIO2, GPIO27, SPI2};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::Blocking;
use log::info;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, ColorOrder, Orientation, Rotation};
use mipidsi::{Builder, Display, NoResetPin};
use static_cell::StaticCell;

use super::ensure_wired;

/// Type alias for the ST7789 display instance using SPI interface
pub type TftDisplay = Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    ST7789,
    NoResetPin,
>;

/// Pins and bus the display is wired to (HSPI IOMUX pins on the ESP32).
pub struct DisplayPeripherals {
    pub mosi: GPIO13<'static>,
    pub sclk: GPIO14<'static>,
    pub cs: GPIO15<'static>,
    pub dc: GPIO2<'static>,
    pub spi: SPI2<'static>,
}

/// Initializes the ST7789 display from the board configuration.
///
/// This function configures:
/// - GPIO pins for display control (DC, CS, SCLK, MOSI)
/// - SPI bus in mode 0 at the configured write clock
/// - Display driver with the configured size, rotation, inversion and
///   color order; the panel reset line is tied to the MCU reset
///
/// # Panics
///
/// Panics if a pin does not match the configuration or if the display
/// fails to initialize.
pub fn initialize_display(p: DisplayPeripherals, config: &DisplayConfig) -> TftDisplay {
    ensure_wired(PinRole::Mosi, config.pins.mosi, &p.mosi);
    ensure_wired(PinRole::Sclk, config.pins.sclk, &p.sclk);
    ensure_wired(PinRole::DisplayCs, config.pins.cs, &p.cs);
    ensure_wired(PinRole::DataCommand, config.pins.dc, &p.dc);

    // Configure GPIO pins for display control signals (DC, CS, clock, and MOSI)
    let dc = Output::new(p.dc, Level::Low, OutputConfig::default());
    let cs = Output::new(p.cs, Level::High, OutputConfig::default());
    let sclk = Output::new(p.sclk, Level::Low, OutputConfig::default());
    let mosi = Output::new(p.mosi, Level::Low, OutputConfig::default());

    let spi = Spi::new(
        p.spi,
        SpiConfig::default()
            .with_frequency(Rate::from_hz(config.spi.write_hz))
            .with_mode(Mode::_0),
    )
    .expect("Failed to configure SPI bus")
    .with_sck(sclk)
    .with_mosi(mosi);

    // Attach the SPI device using the chip-select control pin (no delay used)
    let spi_device =
        ExclusiveDevice::new_no_delay(spi, cs).expect("Failed to attach display chip select");

    // Allocate a buffer for display initialization commands
    static DISPLAY_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();
    let buffer = DISPLAY_BUFFER.init([0_u8; 512]);

    let di = SpiInterface::new(spi_device, dc, buffer);

    let display = Builder::new(ST7789, di)
        .display_size(config.resolution.width, config.resolution.height)
        .orientation(Orientation {
            mirrored: false,
            rotation: rotation(config.rotation),
        })
        .invert_colors(if config.invert_colors {
            ColorInversion::Inverted
        } else {
            ColorInversion::Normal
        })
        .color_order(match config.color_order {
            display::ColorOrder::Rgb => ColorOrder::Rgb,
            display::ColorOrder::Bgr => ColorOrder::Bgr,
        })
        .init(&mut esp_hal::delay::Delay::new())
        .expect("Failed to initialize display");

    info!(
        "{} {}x{} ready, SPI {} Hz, fonts {:?}",
        config.controller,
        config.resolution.width,
        config.resolution.height,
        config.spi.write_hz,
        config.fonts
    );

    display
}

/// Drives the backlight pin high and returns it so the caller keeps it on.
pub fn initialize_backlight(pin: GPIO27<'static>, config: &DisplayConfig) -> Output<'static> {
    ensure_wired(PinRole::Backlight, config.pins.backlight, &pin);
    Output::new(pin, Level::High, OutputConfig::default())
}

fn rotation(rotation: display::Rotation) -> Rotation {
    match rotation {
        display::Rotation::Deg0 => Rotation::Deg0,
        display::Rotation::Deg90 => Rotation::Deg90,
        display::Rotation::Deg180 => Rotation::Deg180,
        display::Rotation::Deg270 => Rotation::Deg270,
    }
}
