//! Background tasks module
//! 
//! This module contains the countdown ticker owned by the engine and the
//! console renderer that runs alongside the HTTP server.

pub mod console_display;
pub mod countdown;

// Re-export main functions
pub use console_display::console_display_task;
pub(crate) use countdown::countdown_task;
