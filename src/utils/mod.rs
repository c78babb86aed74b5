//! Presentation and process helpers

pub mod display;
pub mod logging;

pub use display::{Color, ColorOutput, GridRenderer};
pub use logging::init_logging;
