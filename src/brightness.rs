//! Brightness ramp driven by held buttons
//!
//! Two independent policies run every tick: [`BrightnessRamp::steer`] picks a
//! direction from the held buttons, then [`BrightnessRamp::apply`] steps the
//! value and drops back to [`Direction::Idle`] once a bound is reached.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Direction of the brightness ramp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Down,
    #[default]
    Idle,
    Up,
}

/// Global brightness with a per-tick step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRamp {
    value: u8,
    step: u8,
    direction: Direction,
}

impl BrightnessRamp {
    pub const fn new(value: u8, step: u8) -> Self {
        Self {
            value,
            step,
            direction: Direction::Idle,
        }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Jump to a value and stop ramping
    pub fn set(&mut self, value: u8) {
        self.value = value;
        self.direction = Direction::Idle;
    }

    /// Choose a direction from the held buttons
    ///
    /// Increase wins when both are held. Decrease only applies while the
    /// brightness is above zero.
    pub fn steer(&mut self, increase_held: bool, decrease_held: bool) -> Direction {
        self.direction = if increase_held {
            Direction::Up
        } else if decrease_held && self.value > 0 {
            Direction::Down
        } else {
            Direction::Idle
        };
        self.direction
    }

    /// Step the value in the current direction
    ///
    /// Returns the new value if this step reached 0 or 255.
    pub fn apply(&mut self) -> Option<u8> {
        let next = match self.direction {
            Direction::Idle => return None,
            Direction::Up => self.value.saturating_add(self.step),
            Direction::Down => self.value.saturating_sub(self.step),
        };
        let changed = next != self.value;
        self.value = next;

        if next == u8::MIN || next == u8::MAX {
            self.direction = Direction::Idle;
            if changed {
                #[cfg(feature = "esp32-log")]
                println!("[BrightnessRamp.apply] reached bound {}", next);
                return Some(next);
            }
        }
        None
    }
}

impl Default for BrightnessRamp {
    fn default() -> Self {
        Self::new(crate::config::INITIAL_BRIGHTNESS, crate::config::BRIGHTNESS_STEP)
    }
}
