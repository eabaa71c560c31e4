#![no_std]
//! XH32S Board Support
//!
//! Compile-time configuration for an ESP32 board driving an ST7789 TFT over
//! SPI with a resistive touch overlay. The constants are consumed by the
//! display and touch drivers at init; this crate only declares and checks
//! them.

/// Whole-board pin map and validation.
pub mod board;

/// TFT display configuration.
pub mod display;

/// Configuration errors.
pub mod error;

/// GPIO numbers, roles and platform pin matrix.
pub mod pins;

/// Touch panel configuration and calibration.
pub mod touch;

/// XH32S board constants.
pub mod xh32s;

pub use board::BoardConfig;
pub use error::ConfigError;

#[cfg(test)]
extern crate alloc;
