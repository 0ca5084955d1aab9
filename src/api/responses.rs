//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    display::{render, DisplayFrame},
    state::{TimerState, TimerStatus},
};

/// API response structure for the start and stop endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: TimerStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
    pub frame: DisplayFrame,
}

impl ActionResponse {
    /// Create a new API response describing the state an action left behind
    pub fn new(message: String, timer: TimerState) -> Self {
        Self {
            status: timer.status,
            message,
            timestamp: Utc::now(),
            timer,
            frame: render(&timer),
        }
    }
}

/// Status response with the rendered frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    pub frame: DisplayFrame,
    pub ticks_emitted: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
