//! Hardware initialization modules
//!
//! This module provides organized initialization functions for the
//! peripherals on the XH32S board:
//!
//! - **Display**: ST7789 TFT via SPI, plus the backlight pin
//! - **Touch**: chip select and pen IRQ lines of the resistive touch controller

use board::pins::{Gpio, PinRole};
use esp_hal::gpio::Pin;

pub mod display;
pub mod touch;

// Re-export commonly used types and functions for convenience
pub use display::{initialize_backlight, initialize_display, DisplayPeripherals, TftDisplay};
pub use touch::{initialize_touch, PenIrqLine, TouchCs};

/// Panics unless `pin` is the GPIO the board configuration declares for `role`.
pub fn ensure_wired(role: PinRole, declared: Gpio, pin: &impl Pin) {
    let actual = pin.number();
    if actual != declared.number() {
        panic!("{role} is declared on {declared} but wired to GPIO{actual}");
    }
}
