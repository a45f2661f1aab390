//! Compile-time configuration.
//!
//! Every debounce threshold is a millisecond figure converted into ticks of
//! the frame rate through [`frames_at_rate`], so the scheduler and the buttons
//! cannot drift apart when the frame rate changes.

use embassy_time::Duration;

use crate::button::ButtonConfig;

/// Number of visible LEDs on each strip.
pub const LED_COUNT: usize = 30;

/// Heat cells per visible LED.
pub const OVERSAMPLING: usize = 2;

/// Number of heat cells simulated per strip.
pub const CELL_COUNT: usize = LED_COUNT * OVERSAMPLING;

/// Number of strips driven by the control loop.
pub const STRIP_COUNT: usize = 2;

/// How much the air cools as it rises.
///
/// Less cooling gives taller flames, more cooling gives shorter flames.
/// Suggested range 20-100.
pub const COOLING: u8 = 55;

/// Chance (out of 255) that a new spark is lit on a given tick.
///
/// Higher chance gives a roaring fire, lower chance a flickery one.
/// Suggested range 50-200.
pub const SPARKING: u8 = 120;

/// Sparks are lit in cells `[0, SPARK_ZONE)`.
pub const SPARK_ZONE: usize = 3;

/// Lower bound (inclusive) of the heat added by a spark.
pub const SPARK_HEAT_MIN: u8 = 160;

/// Upper bound (exclusive) of the heat added by a spark.
pub const SPARK_HEAT_MAX: u8 = 255;

/// Heat is scaled into `[0, HEAT_INDEX_MAX]` before palette lookup.
///
/// The last palette entry sits at 240; anything above would blend back
/// toward the first entry.
pub const HEAT_INDEX_MAX: u8 = 240;

/// Tick rate shared by the scheduler and every button threshold.
pub const FRAMES_PER_SECOND: u32 = 60;

/// Fixed period between two ticks.
pub const FRAME_DURATION: Duration = frame_duration_at_rate(FRAMES_PER_SECOND);

/// Brightness change per tick while a brightness button is held.
pub const BRIGHTNESS_STEP: u8 = 1;

/// Brightness after power-up or reset.
pub const INITIAL_BRIGHTNESS: u8 = 128;

/// How long the pin must stay down before a press is trusted.
pub const PRESS_CONFIRM_MILLIS: u32 = 50;

/// How long the pin must stay up before a release is trusted.
pub const RELEASE_CONFIRM_MILLIS: u32 = 50;

/// How long a confirmed press must last before it counts as held.
pub const HOLD_CONFIRM_MILLIS: u32 = 400;

/// [`PRESS_CONFIRM_MILLIS`] in ticks of [`FRAMES_PER_SECOND`].
pub const FRAMES_TO_CONFIRM_PRESS: u16 = frames_from_millis(PRESS_CONFIRM_MILLIS);

/// [`RELEASE_CONFIRM_MILLIS`] in ticks of [`FRAMES_PER_SECOND`].
pub const FRAMES_TO_CONFIRM_RELEASE: u16 = frames_from_millis(RELEASE_CONFIRM_MILLIS);

/// [`HOLD_CONFIRM_MILLIS`] in ticks of [`FRAMES_PER_SECOND`].
pub const FRAMES_TO_CONFIRM_HOLD: u16 = frames_from_millis(HOLD_CONFIRM_MILLIS);

/// Convert a millisecond figure into a tick count at [`FRAMES_PER_SECOND`].
///
/// Never returns less than one tick.
pub const fn frames_from_millis(millis: u32) -> u16 {
    frames_at_rate(millis, FRAMES_PER_SECOND)
}

/// Convert a millisecond figure into a tick count at `frames_per_second`.
///
/// Never returns less than one tick; saturates at `u16::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn frames_at_rate(millis: u32, frames_per_second: u32) -> u16 {
    let frames = millis as u64 * frames_per_second as u64 / 1000;
    if frames == 0 {
        1
    } else if frames > u16::MAX as u64 {
        u16::MAX
    } else {
        frames as u16
    }
}

/// Period of one tick at `frames_per_second`; a rate of zero is treated as one.
#[allow(clippy::cast_lossless)]
pub const fn frame_duration_at_rate(frames_per_second: u32) -> Duration {
    let hz = if frames_per_second == 0 {
        1
    } else {
        frames_per_second
    };
    Duration::from_hz(hz as u64)
}

/// Tunables of the heat model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig {
    /// See [`COOLING`]
    pub cooling: u8,
    /// See [`SPARKING`]
    pub sparking: u8,
}

impl FireConfig {
    pub const fn new() -> Self {
        Self {
            cooling: COOLING,
            sparking: SPARKING,
        }
    }
}

impl Default for FireConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the control loop
///
/// The tick rate is the only timing knob: the scheduler period and every
/// button threshold are derived from `frames_per_second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlConfig {
    pub fire: FireConfig,
    pub frames_per_second: u32,
    pub brightness: u8,
    pub brightness_step: u8,
    /// Render the second strip mirrored
    pub reverse_second_strip: bool,
}

impl ControlConfig {
    pub const fn new() -> Self {
        Self {
            fire: FireConfig::new(),
            frames_per_second: FRAMES_PER_SECOND,
            brightness: INITIAL_BRIGHTNESS,
            brightness_step: BRIGHTNESS_STEP,
            reverse_second_strip: false,
        }
    }

    /// Fixed period between two ticks
    pub const fn frame_duration(&self) -> Duration {
        frame_duration_at_rate(self.frames_per_second)
    }

    /// Debounce thresholds at this tick rate
    pub const fn buttons(&self) -> ButtonConfig {
        ButtonConfig::for_rate(self.frames_per_second)
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self::new()
    }
}
