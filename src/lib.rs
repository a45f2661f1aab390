#![no_std]

pub mod brightness;
pub mod button;
pub mod color;
pub mod config;
pub mod control_loop;
pub mod error;
pub mod fire;
pub mod frame_scheduler;
pub mod math8;
pub mod output;
pub mod random;

pub use brightness::{BrightnessRamp, Direction};
pub use button::{Button, ButtonConfig};
pub use config::{ControlConfig, FireConfig};
pub use control_loop::{ButtonPins, Buttons, ControlLoop, LoopEvent, TickReport};
pub use error::{ButtonId, Error};
pub use fire::FireSimulation;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use output::{OutputDriver, SmartLedsOutput};
pub use random::{EntropySource, FireRng, NoEntropy};

pub use color::{PALETTES, Palette16, Rgb};
pub use embassy_time::{Duration, Instant};
