//! Fixed-tick orchestrator
//!
//! Once per frame the loop reseeds the random generator, samples the buttons,
//! applies their edges and held levels, advances both fire simulations,
//! renders them and hands the pixels to the output driver.

use core::convert::Infallible;

use embassy_time::{Instant, Timer};
use embedded_hal::digital::InputPin;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::BrightnessRamp;
use crate::button::{Button, ButtonConfig};
use crate::color::{PALETTE_COUNT, PALETTES, Palette16, PaletteSelector, Rgb};
use crate::config::{CELL_COUNT, ControlConfig, LED_COUNT, STRIP_COUNT};
use crate::error::{ButtonId, Error};
use crate::fire::FireSimulation;
use crate::frame_scheduler::{FrameResult, FrameScheduler};
use crate::output::OutputDriver;
use crate::random::{EntropySource, FireRng};

/// Capacity of [`TickReport::events`]
pub const MAX_EVENTS: usize = 8;

/// Something the buttons changed during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    /// Both simulations started sparking again
    Enabled,
    /// Both simulations stopped sparking
    Disabled,
    /// A new palette was selected
    PaletteChanged(usize),
    /// Brightness reached 0 or 255 and stopped ramping
    BrightnessLimit(u8),
}

/// Outcome of one tick
#[derive(Debug, Clone)]
pub struct TickReport {
    pub frame: FrameResult,
    pub events: Vec<LoopEvent, MAX_EVENTS>,
}

/// Input pins of the three buttons
#[derive(Debug)]
pub struct ButtonPins<P> {
    pub increase: P,
    pub decrease: P,
    pub palette: P,
}

/// The three control buttons
#[derive(Debug)]
pub struct Buttons<P> {
    /// Click enables the fire, hold ramps brightness up
    pub increase: Button<P>,
    /// Click disables the fire, hold ramps brightness down
    pub decrease: Button<P>,
    /// Click selects the next palette
    pub palette: Button<P>,
}

impl<P> Buttons<P> {
    pub fn new(pins: ButtonPins<P>, config: ButtonConfig) -> Self {
        Self {
            increase: Button::new(pins.increase, config),
            decrease: Button::new(pins.decrease, config),
            palette: Button::new(pins.palette, config),
        }
    }

    fn reset(&mut self) {
        self.increase.reset();
        self.decrease.reset();
        self.palette.reset();
    }
}

impl<P: InputPin> Buttons<P> {
    fn tick(&mut self) -> Result<(), Error<P::Error>> {
        self.increase
            .tick()
            .map_err(|err| Error::Pin(ButtonId::Increase, err))?;
        self.decrease
            .tick()
            .map_err(|err| Error::Pin(ButtonId::Decrease, err))?;
        self.palette
            .tick()
            .map_err(|err| Error::Pin(ButtonId::Palette, err))?;
        Ok(())
    }
}

/// Control loop driving two fire strips
#[derive(Debug)]
pub struct ControlLoop<P, O, N, const LEDS: usize = LED_COUNT, const CELLS: usize = CELL_COUNT>
{
    // External dependencies and configuration
    output: O,
    entropy: N,
    palettes: &'static [Palette16; PALETTE_COUNT],
    config: ControlConfig,

    // Internal state
    rng: FireRng,
    buttons: Buttons<P>,
    fires: [FireSimulation<LEDS, CELLS>; STRIP_COUNT],
    palette: PaletteSelector<PALETTE_COUNT>,
    brightness: BrightnessRamp,
    pixels: [[Rgb; LEDS]; STRIP_COUNT],
    scheduler: FrameScheduler,
}

impl<P, O, N, const LEDS: usize, const CELLS: usize> ControlLoop<P, O, N, LEDS, CELLS>
where
    P: InputPin,
    O: OutputDriver,
    N: EntropySource,
{
    /// Create a control loop whose first frame starts at `start`
    pub fn new(
        pins: ButtonPins<P>,
        output: O,
        entropy: N,
        config: &ControlConfig,
        start: Instant,
    ) -> Self {
        Self {
            output,
            entropy,
            palettes: &PALETTES,
            config: *config,
            rng: FireRng::new(),
            buttons: Buttons::new(pins, config.buttons()),
            fires: Self::initial_fires(config),
            palette: PaletteSelector::new(),
            brightness: BrightnessRamp::new(config.brightness, config.brightness_step),
            pixels: [[Rgb::default(); LEDS]; STRIP_COUNT],
            scheduler: FrameScheduler::with_frame_duration(start, config.frame_duration()),
        }
    }

    /// Replace the built-in palette table
    #[must_use]
    pub fn with_palettes(mut self, palettes: &'static [Palette16; PALETTE_COUNT]) -> Self {
        self.palettes = palettes;
        self
    }

    /// Replace the random generator
    #[must_use]
    pub fn with_rng(mut self, rng: FireRng) -> Self {
        self.rng = rng;
        self
    }

    fn initial_fires(config: &ControlConfig) -> [FireSimulation<LEDS, CELLS>; STRIP_COUNT] {
        [
            FireSimulation::new(config.fire),
            FireSimulation::new(config.fire).with_reversed(config.reverse_second_strip),
        ]
    }

    /// Process one frame
    ///
    /// Returns the deadline of the next frame together with the events the
    /// buttons produced. The caller waits for the deadline before ticking
    /// again; see [`ControlLoop::run`].
    pub fn tick(&mut self, now: Instant) -> Result<TickReport, Error<P::Error>> {
        let mut events = Vec::new();

        self.rng.add_entropy(self.entropy.sample());
        self.buttons.tick()?;

        self.process_clicks(&mut events);
        self.process_holds(&mut events);
        self.process_palette(&mut events);

        for (fire, pixels) in self.fires.iter_mut().zip(self.pixels.iter_mut()) {
            fire.advance(&mut self.rng);
            fire.render(self.palette.current(self.palettes), pixels);
        }

        let [first, second] = &self.pixels;
        self.output
            .show([first.as_slice(), second.as_slice()], self.brightness.value());

        Ok(TickReport {
            frame: self.scheduler.tick(now),
            events,
        })
    }

    /// Run forever at the configured frame rate
    ///
    /// Returns only when a button pin cannot be read.
    pub async fn run(&mut self) -> Result<Infallible, Error<P::Error>> {
        self.scheduler.reset(Instant::now());
        loop {
            let report = self.tick(Instant::now())?;
            Timer::at(report.frame.next_deadline).await;
        }
    }

    /// Reinitialize every piece of state, as after a hardware reset
    pub fn reset(&mut self, now: Instant) {
        self.rng = FireRng::new();
        self.buttons.reset();
        self.fires = Self::initial_fires(&self.config);
        self.palette.reset();
        self.brightness = BrightnessRamp::new(self.config.brightness, self.config.brightness_step);
        self.pixels = [[Rgb::default(); LEDS]; STRIP_COUNT];
        self.scheduler.reset(now);
    }

    /// Apply click edges of the enable/disable buttons
    fn process_clicks(&mut self, events: &mut Vec<LoopEvent, MAX_EVENTS>) {
        if self.buttons.increase.clicked() {
            self.set_enabled(true, events);
        }
        if self.buttons.decrease.clicked() {
            self.set_enabled(false, events);
        }
    }

    /// Apply held levels: force-enable, then ramp brightness
    fn process_holds(&mut self, events: &mut Vec<LoopEvent, MAX_EVENTS>) {
        let increase_held = self.buttons.increase.held();
        let decrease_held = self.buttons.decrease.held();

        if increase_held || decrease_held {
            self.set_enabled(true, events);
        }

        self.brightness.steer(increase_held, decrease_held);
        if let Some(limit) = self.brightness.apply() {
            let _ = events.push(LoopEvent::BrightnessLimit(limit));
        }
    }

    fn process_palette(&mut self, events: &mut Vec<LoopEvent, MAX_EVENTS>) {
        if !self.buttons.palette.clicked() {
            return;
        }
        let index = self.palette.advance();
        #[cfg(feature = "esp32-log")]
        println!("[ControlLoop.process_palette] palette {}", index);
        let _ = events.push(LoopEvent::PaletteChanged(index));
    }

    fn set_enabled(&mut self, enabled: bool, events: &mut Vec<LoopEvent, MAX_EVENTS>) {
        if self.fires.iter().all(|fire| fire.is_enabled() == enabled) {
            return;
        }
        for fire in &mut self.fires {
            if enabled {
                fire.enable();
            } else {
                fire.disable();
            }
        }

        #[cfg(feature = "esp32-log")]
        println!("[ControlLoop.set_enabled] enabled={}", enabled);
        let event = if enabled {
            LoopEvent::Enabled
        } else {
            LoopEvent::Disabled
        };
        let _ = events.push(event);
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness.value()
    }

    /// Jump to a brightness level, stopping any ramp in progress
    pub fn set_brightness(&mut self, value: u8) {
        #[cfg(feature = "esp32-log")]
        println!("[ControlLoop.set_brightness] brightness={}", value);
        self.brightness.set(value);
    }

    pub const fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub const fn brightness_ramp(&self) -> &BrightnessRamp {
        &self.brightness
    }

    pub const fn palette_index(&self) -> usize {
        self.palette.index()
    }

    /// Whether both simulations are lighting new sparks
    pub fn is_enabled(&self) -> bool {
        self.fires.iter().all(FireSimulation::is_enabled)
    }

    pub const fn pixels(&self) -> &[[Rgb; LEDS]; STRIP_COUNT] {
        &self.pixels
    }

    pub const fn simulations(&self) -> &[FireSimulation<LEDS, CELLS>; STRIP_COUNT] {
        &self.fires
    }

    pub const fn buttons(&self) -> &Buttons<P> {
        &self.buttons
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub const fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}
