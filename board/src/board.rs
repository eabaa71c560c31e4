//! Whole-board configuration and validation.

use embedded_graphics_core::geometry::Point;

use crate::display::DisplayConfig;
use crate::error::ConfigError;
use crate::pins::{PinAssignment, PinRole, Platform};
use crate::touch::{RawSample, TouchConfig};

/// Number of signals the display and touch panel connect to the MCU.
pub const PIN_ROLES: usize = 9;

/// One MCU, one display, one touch panel.
#[derive(Debug, Clone, Copy)]
pub struct BoardConfig {
    pub name: &'static str,
    pub platform: Platform,
    pub display: DisplayConfig,
    pub touch: TouchConfig,
}

impl BoardConfig {
    /// Every signal and the GPIO it is wired to, display first.
    pub const fn pin_assignments(&self) -> [PinAssignment; PIN_ROLES] {
        let d = &self.display.pins;
        let t = &self.touch.pins;
        [
            PinAssignment::new(PinRole::Mosi, Some(d.mosi)),
            PinAssignment::new(PinRole::Miso, d.miso),
            PinAssignment::new(PinRole::Sclk, Some(d.sclk)),
            PinAssignment::new(PinRole::DisplayCs, Some(d.cs)),
            PinAssignment::new(PinRole::DataCommand, Some(d.dc)),
            PinAssignment::new(PinRole::Reset, d.reset),
            PinAssignment::new(PinRole::Backlight, Some(d.backlight)),
            PinAssignment::new(PinRole::TouchCs, Some(t.cs)),
            PinAssignment::new(PinRole::TouchIrq, Some(t.irq)),
        ]
    }

    /// Checks display geometry and clocks, touch clock and calibration, then
    /// every pin against the platform and against each other. Returns the
    /// first problem found.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.display.validate(&self.platform) {
            return Err(e);
        }
        if let Err(e) = self.touch.validate(&self.platform) {
            return Err(e);
        }

        let assignments = self.pin_assignments();
        let mut i = 0;
        while i < PIN_ROLES {
            if let Err(e) = self.check_pin(assignments[i]) {
                return Err(e);
            }
            i += 1;
        }

        let mut i = 0;
        while i < PIN_ROLES {
            let mut j = i + 1;
            while j < PIN_ROLES {
                if let (Some(a), Some(b)) = (assignments[i].pin, assignments[j].pin) {
                    if a.0 == b.0 {
                        return Err(ConfigError::PinConflict {
                            first: assignments[i].role,
                            second: assignments[j].role,
                            pin: a,
                        });
                    }
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }

    const fn check_pin(&self, assignment: PinAssignment) -> Result<(), ConfigError> {
        let Some(pin) = assignment.pin else {
            return Ok(());
        };
        let role = assignment.role;
        if !self.platform.has_pin(pin) {
            return Err(ConfigError::PinUnavailable { role, pin });
        }
        if self.platform.is_reserved(pin) {
            return Err(ConfigError::PinReserved { role, pin });
        }
        if role.is_output() && self.platform.is_input_only(pin) {
            return Err(ConfigError::PinInputOnly { role, pin });
        }
        Ok(())
    }

    /// Assignments that land on boot strapping pins. Legal, but the attached
    /// circuit must not hold the pin at the wrong level during reset.
    pub fn strapping_pins(&self) -> impl Iterator<Item = PinAssignment> + '_ {
        self.pin_assignments().into_iter().filter(|a| {
            a.pin
                .map(|pin| self.platform.is_strapping(pin))
                .unwrap_or(false)
        })
    }

    /// Maps a raw touch sample to a pixel on the display as currently rotated.
    pub fn touch_to_screen(&self, raw: RawSample) -> Point {
        self.touch
            .calibration
            .to_screen(raw, self.display.resolution, self.display.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Rotation;
    use crate::pins::Gpio;
    use crate::xh32s::BOARD;
    use alloc::vec::Vec;

    #[test]
    fn test_xh32s_is_valid() {
        assert_eq!(BOARD.validate(), Ok(()));
    }

    #[test]
    fn test_pin_assignments_order() {
        let assignments = BOARD.pin_assignments();
        assert_eq!(assignments[0], PinAssignment::new(PinRole::Mosi, Some(Gpio(13))));
        assert_eq!(assignments[1], PinAssignment::new(PinRole::Miso, None));
        assert_eq!(assignments[5], PinAssignment::new(PinRole::Reset, None));
        assert_eq!(assignments[8], PinAssignment::new(PinRole::TouchIrq, Some(Gpio(36))));
    }

    #[test]
    fn test_pins_distinct_across_display_and_touch() {
        let pins: Vec<u8> = BOARD
            .pin_assignments()
            .iter()
            .filter_map(|a| a.pin)
            .map(Gpio::number)
            .collect();
        assert_eq!(pins.len(), 7);
        for (i, a) in pins.iter().enumerate() {
            assert!(pins[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn test_touch_cs_conflicting_with_display_cs() {
        let mut board = BOARD;
        board.touch.pins.cs = Gpio(15);
        assert_eq!(
            board.validate(),
            Err(ConfigError::PinConflict {
                first: PinRole::DisplayCs,
                second: PinRole::TouchCs,
                pin: Gpio(15),
            })
        );
    }

    #[test]
    fn test_reset_pin_conflicts_when_connected() {
        let mut board = BOARD;
        board.display.pins.reset = Some(Gpio(27));
        assert_eq!(
            board.validate(),
            Err(ConfigError::PinConflict {
                first: PinRole::Reset,
                second: PinRole::Backlight,
                pin: Gpio(27),
            })
        );

        board.display.pins.reset = Some(Gpio(4));
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn test_pin_outside_platform() {
        let mut board = BOARD;
        board.display.pins.backlight = Gpio(40);
        assert_eq!(
            board.validate(),
            Err(ConfigError::PinUnavailable {
                role: PinRole::Backlight,
                pin: Gpio(40),
            })
        );

        board.display.pins.backlight = Gpio(24);
        assert!(matches!(
            board.validate(),
            Err(ConfigError::PinUnavailable { .. })
        ));
    }

    #[test]
    fn test_flash_pin_rejected() {
        let mut board = BOARD;
        board.display.pins.dc = Gpio(9);
        assert_eq!(
            board.validate(),
            Err(ConfigError::PinReserved {
                role: PinRole::DataCommand,
                pin: Gpio(9),
            })
        );
    }

    #[test]
    fn test_input_only_pin_needs_input_role() {
        let mut board = BOARD;
        board.touch.pins.cs = Gpio(34);
        assert_eq!(
            board.validate(),
            Err(ConfigError::PinInputOnly {
                role: PinRole::TouchCs,
                pin: Gpio(34),
            })
        );

        // MISO is an input and may use an input-only pad
        let mut board = BOARD;
        board.display.pins.miso = Some(Gpio(39));
        assert_eq!(board.validate(), Ok(()));
    }

    #[test]
    fn test_geometry_checked_before_pins() {
        let mut board = BOARD;
        board.display.resolution.height = 0;
        board.touch.pins.cs = Gpio(15);
        assert_eq!(board.validate(), Err(ConfigError::ZeroResolution));
    }

    #[test]
    fn test_strapping_pins() {
        let strapping: Vec<PinRole> = BOARD.strapping_pins().map(|a| a.role).collect();
        assert_eq!(strapping, [PinRole::DisplayCs, PinRole::DataCommand]);
    }

    #[test]
    fn test_touch_to_screen_follows_rotation() {
        let raw = RawSample::new(3800, 300);
        assert_eq!(BOARD.touch_to_screen(raw), Point::new(239, 0));

        let mut board = BOARD;
        board.display.rotation = Rotation::Deg90;
        assert_eq!(board.touch_to_screen(raw), Point::new(319, 239));
    }
}
