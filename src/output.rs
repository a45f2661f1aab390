//! LED transport seam
//!
//! The control loop hands both pixel buffers and the global brightness to an
//! [`OutputDriver`] once per frame. [`SmartLedsOutput`] adapts any pair of
//! `smart-leds` writers.

use smart_leds::{SmartLedsWrite, brightness, gamma};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::config::STRIP_COUNT;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The control loop is generic over this trait.
pub trait OutputDriver {
    /// Push one frame of every strip to the hardware
    fn show(&mut self, strips: [&[Rgb]; STRIP_COUNT], brightness: u8);
}

/// Output over two `smart-leds` writers
///
/// Applies gamma correction (optional) and global brightness before writing.
#[derive(Debug)]
pub struct SmartLedsOutput<A, B> {
    first: A,
    second: B,
    gamma: bool,
}

impl<A, B> SmartLedsOutput<A, B>
where
    A: SmartLedsWrite<Color = Rgb>,
    B: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            gamma: true,
        }
    }

    /// Enable or disable gamma correction
    #[must_use]
    pub fn with_gamma(mut self, gamma: bool) -> Self {
        self.gamma = gamma;
        self
    }

    /// Give the writers back
    pub fn release(self) -> (A, B) {
        (self.first, self.second)
    }

    fn write_strip<W>(writer: &mut W, pixels: &[Rgb], level: u8, with_gamma: bool)
    where
        W: SmartLedsWrite<Color = Rgb>,
    {
        let pixels = pixels.iter().copied();
        let result = if with_gamma {
            writer.write(brightness(gamma(pixels), level))
        } else {
            writer.write(brightness(pixels, level))
        };
        if result.is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.show] strip write failed");
        }
    }
}

impl<A, B> OutputDriver for SmartLedsOutput<A, B>
where
    A: SmartLedsWrite<Color = Rgb>,
    B: SmartLedsWrite<Color = Rgb>,
{
    fn show(&mut self, strips: [&[Rgb]; STRIP_COUNT], brightness: u8) {
        let [first, second] = strips;
        Self::write_strip(&mut self.first, first, brightness, self.gamma);
        Self::write_strip(&mut self.second, second, brightness, self.gamma);
    }
}
