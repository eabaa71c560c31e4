//! Touch hardware initialization module
//!
//! The touch controller itself is driven by an external sampling driver.
//! This module only parks its chip select so it stays off the shared SPI
//! bus, and wraps the pen IRQ line.

use board::pins::PinRole;
use board::touch::{PenIrq, TouchConfig};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::peripherals::{GPIO33, GPIO36};

use super::ensure_wired;

/// Touch controller chip select, held high (deselected)
pub type TouchCs = Output<'static>;

/// Type alias for the pen IRQ wrapper over the ESP32 input
pub type PenIrqLine = PenIrq<Input<'static>>;

/// Configures the touch chip select and pen IRQ lines.
///
/// GPIO36 is input-only and has no internal pull resistors, so the IRQ
/// relies on the pull-up on the touch controller side.
///
/// # Panics
///
/// Panics if a pin does not match the configuration.
pub fn initialize_touch(
    cs: GPIO33<'static>,
    irq: GPIO36<'static>,
    config: &TouchConfig,
) -> (TouchCs, PenIrqLine) {
    ensure_wired(PinRole::TouchCs, config.pins.cs, &cs);
    ensure_wired(PinRole::TouchIrq, config.pins.irq, &irq);

    let cs = Output::new(cs, Level::High, OutputConfig::default());
    let irq = Input::new(irq, InputConfig::default().with_pull(Pull::None));
    (cs, PenIrq::new(irq))
}
