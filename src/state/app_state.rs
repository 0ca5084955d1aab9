//! Main application state management

use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{TimerEngine, TimerState};

/// Application context shared with the HTTP layer
#[derive(Debug)]
pub struct AppState {
    /// The one countdown this process drives
    pub engine: TimerEngine,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create a new AppState with an idle engine
    pub fn new(port: u16, host: String) -> Self {
        Self {
            engine: TimerEngine::new(),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Start (or restart) the countdown
    pub fn start_timer(&self) -> TimerState {
        info!("Start pressed");
        self.engine.start();
        self.record_action("start");
        self.engine.snapshot()
    }

    /// Stop the countdown
    pub fn stop_timer(&self) -> TimerState {
        info!("Stop pressed");
        self.engine.stop();
        self.record_action("stop");
        self.engine.snapshot()
    }

    fn record_action(&self, action: &str) {
        let mut last_action = self.last_action.lock().unwrap_or_else(PoisonError::into_inner);
        *last_action = Some((action.to_string(), Utc::now()));
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().unwrap_or_else(PoisonError::into_inner);
        match last_action.as_ref() {
            Some((action, time)) => (Some(action.clone()), Some(*time)),
            None => (None, None),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
