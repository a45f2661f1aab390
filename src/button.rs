//! Frame-count debounced push-button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up: a low pin level means "down".
//! [`Button::tick`] must be called once per frame at the fixed tick rate,
//! because every threshold is a number of ticks rather than a wall-clock time.
//!
//! ## States
//!
//! | State           | Pin down                             | Pin up                                |
//! |-----------------|--------------------------------------|---------------------------------------|
//! | Released        | start press countdown                | stay                                  |
//! | Press pending   | count down, confirm press at zero    | abort, back to released               |
//! | Pressed         | stay                                 | start release countdown               |
//! | Release pending | abort, back to pressed               | count down, confirm release at zero   |
//!
//! The tick that starts a countdown counts as its first frame, so a press is
//! confirmed after exactly `frames_to_confirm_press` consecutive down ticks.

use embedded_hal::digital::InputPin;

use crate::config::{
    FRAMES_PER_SECOND, HOLD_CONFIRM_MILLIS, PRESS_CONFIRM_MILLIS, RELEASE_CONFIRM_MILLIS,
    frames_at_rate,
};

/// Debounce thresholds, in ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub frames_to_confirm_press: u16,
    pub frames_to_confirm_release: u16,
    /// Ticks after a confirmed press before the button reports [`Button::held`]
    pub frames_to_confirm_hold: u16,
}

impl ButtonConfig {
    /// Default thresholds at [`FRAMES_PER_SECOND`]
    pub const fn new() -> Self {
        Self::for_rate(FRAMES_PER_SECOND)
    }

    /// Default thresholds for buttons ticked `frames_per_second` times a second
    pub const fn for_rate(frames_per_second: u32) -> Self {
        Self {
            frames_to_confirm_press: frames_at_rate(PRESS_CONFIRM_MILLIS, frames_per_second),
            frames_to_confirm_release: frames_at_rate(RELEASE_CONFIRM_MILLIS, frames_per_second),
            frames_to_confirm_hold: frames_at_rate(HOLD_CONFIRM_MILLIS, frames_per_second),
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounced button on an input pin
#[derive(Debug)]
pub struct Button<P> {
    pin: P,
    config: ButtonConfig,
    /// Debounced level
    confirmed: bool,
    /// Remaining ticks of the transition in progress
    pending: Option<u16>,
    clicked: bool,
    pressed_frames: u16,
}

impl<P> Button<P> {
    pub fn new(pin: P, config: ButtonConfig) -> Self {
        Self {
            pin,
            config,
            confirmed: false,
            pending: None,
            clicked: false,
            pressed_frames: 0,
        }
    }

    /// Debounced level
    pub const fn is_pressed(&self) -> bool {
        self.confirmed
    }

    /// True only on the tick a press was confirmed
    pub const fn clicked(&self) -> bool {
        self.clicked
    }

    /// True while a confirmed press has lasted past the hold threshold
    pub const fn held(&self) -> bool {
        self.confirmed && self.pressed_frames >= self.config.frames_to_confirm_hold
    }

    /// Ticks the confirmed press has lasted, counting the confirming tick
    pub const fn held_frames(&self) -> u16 {
        self.pressed_frames
    }

    /// True while a press or release is waiting to be confirmed
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub const fn config(&self) -> ButtonConfig {
        self.config
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Return to the released state
    pub fn reset(&mut self) {
        self.confirmed = false;
        self.pending = None;
        self.clicked = false;
        self.pressed_frames = 0;
    }

    /// Run one step of the state machine with an already sampled level
    pub fn update(&mut self, is_down: bool) {
        self.clicked = false;

        match (self.confirmed, self.pending, is_down) {
            // Released, pin down: start press countdown
            (false, None, true) => {
                self.pending = Self::countdown(self.config.frames_to_confirm_press);
                if self.pending.is_none() {
                    self.confirm_press();
                }
            }
            // Press pending, pin still down
            (false, Some(remaining), true) => {
                self.pending = Self::countdown(remaining);
                if self.pending.is_none() {
                    self.confirm_press();
                }
            }
            // Press pending, pin bounced up: abort
            (false, Some(_), false) => {
                self.pending = None;
            }
            // Pressed, pin up: start release countdown
            (true, None, false) => {
                self.pending = Self::countdown(self.config.frames_to_confirm_release);
                if self.pending.is_none() {
                    self.confirm_release();
                }
            }
            // Release pending, pin still up
            (true, Some(remaining), false) => {
                self.pending = Self::countdown(remaining);
                if self.pending.is_none() {
                    self.confirm_release();
                }
            }
            // Release pending, pin bounced down: abort
            (true, Some(_), true) => {
                self.pending = None;
            }
            (false, None, false) | (true, None, true) => {}
        }

        if self.confirmed {
            self.pressed_frames = self.pressed_frames.saturating_add(1);
        }
    }

    /// Consume one frame of a countdown; `None` once it has run out
    fn countdown(remaining: u16) -> Option<u16> {
        match remaining.saturating_sub(1) {
            0 => None,
            left => Some(left),
        }
    }

    fn confirm_press(&mut self) {
        self.confirmed = true;
        self.clicked = true;
        self.pressed_frames = 0;
    }

    fn confirm_release(&mut self) {
        self.confirmed = false;
        self.pressed_frames = 0;
    }
}

impl<P: InputPin> Button<P> {
    /// Sample the pin and run one step of the state machine
    pub fn tick(&mut self) -> Result<(), P::Error> {
        let is_down = self.pin.is_low()?;
        self.update(is_down);
        Ok(())
    }
}
