//! Resistive touch panel configuration
//!
//! The touch controller shares the display's SPI bus on its own chip select
//! and signals contact on an active-low IRQ line. Raw samples are 12-bit ADC
//! readings in the panel's native portrait frame; [`Calibration`] maps them
//! linearly onto screen pixels.

use core::fmt;

use embedded_graphics_core::geometry::Point;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::display::{Resolution, Rotation};
use crate::error::{ConfigError, SpiClock};
use crate::pins::{Gpio, Platform};

/// Largest value a 12-bit ADC reports.
pub const ADC_MAX: u16 = 4095;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Raw ADC span covering one screen axis edge to edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    pub min: u16,
    pub max: u16,
}

impl AxisCalibration {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    pub const fn span(&self) -> u16 {
        self.max.saturating_sub(self.min)
    }

    /// Maps a raw sample onto `0..extent`.
    ///
    /// Samples outside the calibrated span are clamped to its edges, and a
    /// sample at `max` lands on the last pixel rather than one past it.
    pub fn scale(&self, raw: u16, extent: u16) -> u16 {
        let span = u32::from(self.span());
        if span == 0 || extent == 0 {
            return 0;
        }
        let raw = raw.clamp(self.min, self.max);
        let offset = u32::from(raw - self.min);
        let position = offset * u32::from(extent) / span;
        position.min(u32::from(extent - 1)) as u16
    }

    const fn validate(&self, axis: Axis) -> Result<(), ConfigError> {
        if self.min >= self.max {
            return Err(ConfigError::InvertedCalibration {
                axis,
                min: self.min,
                max: self.max,
            });
        }
        if self.max > ADC_MAX {
            return Err(ConfigError::CalibrationOutOfRange {
                axis,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One raw reading from the touch controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub x: u16,
    pub y: u16,
}

impl RawSample {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub x: AxisCalibration,
    pub y: AxisCalibration,
}

impl Calibration {
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.x.validate(Axis::X) {
            return Err(e);
        }
        self.y.validate(Axis::Y)
    }

    /// Maps a raw sample to a pixel on a panel of `native` size shown with
    /// `rotation`.
    pub fn to_screen(&self, raw: RawSample, native: Resolution, rotation: Rotation) -> Point {
        let px = i32::from(self.x.scale(raw.x, native.width));
        let py = i32::from(self.y.scale(raw.y, native.height));
        let w = i32::from(native.width);
        let h = i32::from(native.height);

        match rotation {
            Rotation::Deg0 => Point::new(px, py),
            Rotation::Deg90 => Point::new(h - 1 - py, px),
            Rotation::Deg180 => Point::new(w - 1 - px, h - 1 - py),
            Rotation::Deg270 => Point::new(py, w - 1 - px),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPins {
    pub cs: Gpio,
    pub irq: Gpio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchConfig {
    pub pins: TouchPins,
    /// Bus clock while the touch controller is selected.
    pub spi_hz: u32,
    pub calibration: Calibration,
}

impl TouchConfig {
    /// Checks the bus clock and calibration. Pins are checked board-wide.
    pub const fn validate(&self, platform: &Platform) -> Result<(), ConfigError> {
        if let Err(e) = crate::display::check_clock(SpiClock::Touch, self.spi_hz, platform) {
            return Err(e);
        }
        self.calibration.validate()
    }
}

/// Pen IRQ line of the touch controller. The controller pulls it low while
/// the panel is pressed.
#[derive(Debug)]
pub struct PenIrq<PIN> {
    pin: PIN,
}

impl<PIN> PenIrq<PIN>
where
    PIN: InputPin,
{
    pub fn new(pin: PIN) -> Self {
        Self { pin }
    }

    pub fn is_pressed(&mut self) -> Result<bool, PIN::Error> {
        self.pin.is_low()
    }

    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<PIN> PenIrq<PIN>
where
    PIN: InputPin + Wait,
{
    /// Waits until the panel is pressed. Returns immediately if it already is.
    pub async fn wait_for_press(&mut self) -> Result<(), PIN::Error> {
        self.pin.wait_for_low().await
    }

    /// Waits until the pen is lifted.
    pub async fn wait_for_release(&mut self) -> Result<(), PIN::Error> {
        self.pin.wait_for_high().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xh32s;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    const NATIVE: Resolution = Resolution::new(240, 320);

    struct FakePin {
        low: bool,
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    #[test]
    fn test_midpoint_maps_to_screen_center() {
        let x = AxisCalibration::new(300, 3800);
        assert_eq!(x.scale(2050, 240), 120);
        let y = AxisCalibration::new(300, 3800);
        assert_eq!(y.scale(2050, 320), 160);
    }

    #[test]
    fn test_scale_edges_and_clamping() {
        let x = AxisCalibration::new(300, 3800);
        assert_eq!(x.scale(300, 240), 0);
        assert_eq!(x.scale(3800, 240), 239);
        assert_eq!(x.scale(0, 240), 0);
        assert_eq!(x.scale(4095, 240), 239);
    }

    #[test]
    fn test_scale_degenerate_span() {
        let x = AxisCalibration::new(1000, 1000);
        assert_eq!(x.scale(1000, 240), 0);
        assert_eq!(AxisCalibration::new(300, 3800).scale(2000, 0), 0);
    }

    #[test]
    fn test_to_screen_rotations() {
        let calibration = xh32s::TOUCH.calibration;
        let top_left = RawSample::new(300, 300);

        assert_eq!(
            calibration.to_screen(top_left, NATIVE, Rotation::Deg0),
            Point::new(0, 0)
        );
        assert_eq!(
            calibration.to_screen(top_left, NATIVE, Rotation::Deg90),
            Point::new(319, 0)
        );
        assert_eq!(
            calibration.to_screen(top_left, NATIVE, Rotation::Deg180),
            Point::new(239, 319)
        );
        assert_eq!(
            calibration.to_screen(top_left, NATIVE, Rotation::Deg270),
            Point::new(0, 239)
        );

        let center = RawSample::new(2050, 2050);
        assert_eq!(
            calibration.to_screen(center, NATIVE, Rotation::Deg0),
            Point::new(120, 160)
        );
    }

    #[test]
    fn test_inverted_calibration_rejected() {
        let calibration = Calibration {
            x: AxisCalibration::new(300, 3800),
            y: AxisCalibration::new(3800, 300),
        };
        assert_eq!(
            calibration.validate(),
            Err(ConfigError::InvertedCalibration {
                axis: Axis::Y,
                min: 3800,
                max: 300,
            })
        );

        let calibration = Calibration {
            x: AxisCalibration::new(300, 300),
            y: AxisCalibration::new(300, 3800),
        };
        assert!(matches!(
            calibration.validate(),
            Err(ConfigError::InvertedCalibration { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn test_calibration_beyond_adc_rejected() {
        let calibration = Calibration {
            x: AxisCalibration::new(300, 4096),
            y: AxisCalibration::new(300, 3800),
        };
        assert_eq!(
            calibration.validate(),
            Err(ConfigError::CalibrationOutOfRange {
                axis: Axis::X,
                max: 4096,
            })
        );
    }

    #[test]
    fn test_touch_clock_checked() {
        let mut config = xh32s::TOUCH;
        config.spi_hz = 0;
        assert!(matches!(
            config.validate(&crate::pins::ESP32),
            Err(ConfigError::SpiClockOutOfRange {
                clock: SpiClock::Touch,
                ..
            })
        ));
    }

    #[test]
    fn test_pen_irq_active_low() {
        let mut irq = PenIrq::new(FakePin { low: true });
        assert_eq!(irq.is_pressed(), Ok(true));

        let mut irq = PenIrq::new(FakePin { low: false });
        assert_eq!(irq.is_pressed(), Ok(false));
        assert!(!irq.release().low);
    }
}
