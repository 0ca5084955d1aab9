//! Sand Clock - a fixed five-minute countdown display
//! 
//! This library provides the countdown engine, the display binding that renders
//! its state, and an HTTP surface exposing the start/stop controls.

pub mod api;
pub mod config;
pub mod display;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use display::{DisplayBinding, DisplayFrame};
pub use state::{AppState, TimerEngine, TimerState, TimerStatus};
pub use utils::signals::shutdown_signal;
