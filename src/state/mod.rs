//! State management module
//! 
//! This module contains the timer state, the engine that drives it and the
//! application context shared with the HTTP layer.

pub mod app_state;
pub mod timer_engine;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use timer_engine::TimerEngine;
pub use timer_state::{TimerState, TimerStatus, COUNTDOWN_MILLIS, TICK_MILLIS};
