//! XH32S: ESP32 with a 240x320 ST7789 TFT on HSPI and a resistive touch
//! overlay sharing the bus.
//!
//! GPIO |     Function     | Notes
//! -----+------------------+-----------------------------------------
//!   2  | TFT DC           | Strapping pin, must float low at reset
//!  13  | SPI MOSI         | Shared by display and touch
//!  14  | SPI SCLK         | Shared by display and touch
//!  15  | TFT CS           | Strapping pin
//!  27  | TFT backlight    | Active high
//!  33  | Touch CS         |
//!  36  | Touch IRQ        | Input only, active low, external pull-up
//!   -  | TFT reset        | Tied to the ESP32 EN line

use crate::board::BoardConfig;
use crate::display::{
    ColorOrder, Controller, DisplayConfig, DisplayPins, Fonts, Resolution, Rotation, SpiClocks,
};
use crate::pins::{Gpio, ESP32};
use crate::touch::{AxisCalibration, Calibration, TouchConfig, TouchPins};

pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 320;

pub const DISPLAY: DisplayConfig = DisplayConfig {
    controller: Controller::St7789,
    resolution: Resolution::new(DISPLAY_WIDTH, DISPLAY_HEIGHT),
    rotation: Rotation::Deg0,
    invert_colors: true,
    color_order: ColorOrder::Rgb,
    pins: DisplayPins {
        mosi: Gpio(13),
        miso: None,
        sclk: Gpio(14),
        cs: Gpio(15),
        dc: Gpio(2),
        reset: None,
        backlight: Gpio(27),
    },
    fonts: Fonts::GLCD
        .union(Fonts::FONT2)
        .union(Fonts::FONT4)
        .union(Fonts::GFXFF),
    spi: SpiClocks {
        write_hz: 40_000_000,
        read_hz: 20_000_000,
    },
};

pub const TOUCH: TouchConfig = TouchConfig {
    pins: TouchPins {
        cs: Gpio(33),
        irq: Gpio(36),
    },
    spi_hz: 2_500_000,
    // Raw ADC range reported at the panel edges
    calibration: Calibration {
        x: AxisCalibration::new(300, 3800),
        y: AxisCalibration::new(300, 3800),
    },
};

pub const BOARD: BoardConfig = BoardConfig {
    name: "XH32S",
    platform: ESP32,
    display: DISPLAY,
    touch: TOUCH,
};

const _: () = assert!(BOARD.validate().is_ok(), "XH32S board configuration is invalid");
