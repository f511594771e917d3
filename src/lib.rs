pub mod color;
pub mod config;
pub mod constants;
pub mod oscillator;
pub mod pattern;
pub mod state;

pub use color::ColorSample;
pub use config::HarmonographConfig;
pub use oscillator::{Oscillator, OscillatorSet};
pub use pattern::Pattern;
pub use state::StateVector;
