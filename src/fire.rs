//! One-dimensional fire simulation
//!
//! Each strip owns an array of heat cells, oversampled relative to the number
//! of visible LEDs. Every tick the array cools, heat drifts upward, and new
//! sparks may ignite near the base. Rendering maps heat through a palette and
//! averages each LED's group of cells into one pixel.

use rand::Rng;

use crate::color::{Palette16, Rgb, average_colors, color_from_palette, heat_to_index};
use crate::config::{FireConfig, SPARK_HEAT_MAX, SPARK_HEAT_MIN, SPARK_ZONE};
use crate::math8::diffuse8;

/// Heat-cell automaton for one strip
///
/// `LEDS` is the number of visible pixels, `CELLS` the number of simulated
/// heat cells. `CELLS` must be a non-zero multiple of `LEDS`; any other
/// geometry fails to compile when the simulation is constructed.
#[derive(Debug, Clone)]
pub struct FireSimulation<const LEDS: usize, const CELLS: usize> {
    config: FireConfig,
    /// Exclusive upper bound of the per-cell cooling draw
    cooling_bound: u16,
    heat: [u8; CELLS],
    enabled: bool,
    reversed: bool,
}

impl<const LEDS: usize, const CELLS: usize> FireSimulation<LEDS, CELLS> {
    /// Heat cells per rendered pixel
    pub const OVERSAMPLING: usize = CELLS / LEDS;

    /// Create an enabled simulation with all cells cold
    pub fn new(config: FireConfig) -> Self {
        Self::from_heat(config, [0; CELLS])
    }

    /// Create an enabled simulation starting from a given heat array
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_heat(config: FireConfig, heat: [u8; CELLS]) -> Self {
        const {
            assert!(LEDS > 0, "strip must have at least one LED");
            assert!(
                CELLS >= LEDS && CELLS % LEDS == 0,
                "heat cell count must be a multiple of the LED count"
            );
        };

        let cooling_bound = (usize::from(config.cooling) * 10 / CELLS + 2).min(256) as u16;
        Self {
            config,
            cooling_bound,
            heat,
            enabled: true,
            reversed: false,
        }
    }

    /// Render pixels in reverse order, for strips wired top-down
    #[must_use]
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stop lighting new sparks; the existing flame keeps cooling down
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub const fn heat(&self) -> &[u8; CELLS] {
        &self.heat
    }

    pub const fn config(&self) -> FireConfig {
        self.config
    }

    /// Zero every cell
    pub fn clear(&mut self) {
        self.heat = [0; CELLS];
    }

    /// Advance the automaton by one tick: cool, diffuse, then spark
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        self.cool(rng);
        self.diffuse();
        if self.enabled {
            self.spark(rng);
        }
    }

    /// Subtract a random amount from every cell, saturating at zero
    #[allow(clippy::cast_possible_truncation)]
    pub fn cool<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.heat {
            let amount = rng.random_range(0..self.cooling_bound);
            *cell = cell.saturating_sub(amount.min(255) as u8);
        }
    }

    /// Move heat upward
    ///
    /// Runs from the top down so each cell reads the pre-pass values of the
    /// two cells beneath it. The bottom two cells are left untouched.
    pub fn diffuse(&mut self) {
        for k in (2..CELLS).rev() {
            self.heat[k] = diffuse8(self.heat[k - 1], self.heat[k - 2]);
        }
    }

    /// Possibly ignite a new spark near the base
    pub fn spark<R: Rng>(&mut self, rng: &mut R) {
        if rng.random_range(0..u8::MAX) >= self.config.sparking {
            return;
        }
        let y = rng.random_range(0..SPARK_ZONE.min(CELLS));
        let amount = rng.random_range(SPARK_HEAT_MIN..SPARK_HEAT_MAX);
        self.heat[y] = self.heat[y].saturating_add(amount);
    }

    /// Map the heat array through `palette` into one color per LED
    pub fn render(&self, palette: &Palette16, leds: &mut [Rgb; LEDS]) {
        let groups = self.heat.chunks_exact(Self::OVERSAMPLING);
        for (j, cells) in groups.enumerate() {
            let color = average_colors(
                cells
                    .iter()
                    .map(|&heat| color_from_palette(palette, heat_to_index(heat))),
            );
            let target = if self.reversed { LEDS - 1 - j } else { j };
            leds[target] = color;
        }
    }
}

impl<const LEDS: usize, const CELLS: usize> Default for FireSimulation<LEDS, CELLS> {
    fn default() -> Self {
        Self::new(FireConfig::default())
    }
}
