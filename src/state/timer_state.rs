//! Timer state structure and management

use serde::{Deserialize, Serialize};

/// Fixed countdown length: five minutes
pub const COUNTDOWN_MILLIS: u64 = 300_000;

/// Spacing between ticks
pub const TICK_MILLIS: u64 = 1_000;

/// Lifecycle of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Finished,
}

/// Timer state published to every display subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_millis: u64,
    pub status: TimerStatus,
}

impl TimerState {
    /// Create the initial idle state showing the full duration
    pub fn new() -> Self {
        Self {
            remaining_millis: COUNTDOWN_MILLIS,
            status: TimerStatus::Idle,
        }
    }

    /// Create a freshly started countdown
    pub fn running() -> Self {
        Self {
            remaining_millis: COUNTDOWN_MILLIS,
            status: TimerStatus::Running,
        }
    }

    /// Create the cancelled state left behind by a stop
    pub fn stopped() -> Self {
        Self {
            remaining_millis: 0,
            status: TimerStatus::Idle,
        }
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Check if the countdown ran all the way down
    pub fn is_finished(&self) -> bool {
        self.status == TimerStatus::Finished
    }

    /// Apply one tick. Returns true when this tick finished the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.remaining_millis = self.remaining_millis.saturating_sub(TICK_MILLIS);
        if self.remaining_millis == 0 {
            self.status = TimerStatus::Finished;
            true
        } else {
            false
        }
    }

    /// Remaining time as whole minutes and seconds
    pub fn minutes_seconds(&self) -> (u64, u64) {
        let total_seconds = self.remaining_millis / 1000;
        (total_seconds / 60, total_seconds % 60)
    }

    /// Remaining time as `m:ss`
    pub fn label(&self) -> String {
        let (minutes, seconds) = self.minutes_seconds();
        format!("{}:{:02}", minutes, seconds)
    }

    /// Fraction of the countdown still remaining, in `[0.0, 1.0]`
    pub fn progress(&self) -> f32 {
        (self.remaining_millis.min(COUNTDOWN_MILLIS) as f64 / COUNTDOWN_MILLIS as f64) as f32
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle_at_full_duration() {
        let state = TimerState::new();
        assert_eq!(state.status, TimerStatus::Idle);
        assert_eq!(state.remaining_millis, COUNTDOWN_MILLIS);
        assert_eq!(state.label(), "5:00");
    }

    #[test]
    fn test_tick_counts_down_and_finishes() {
        let mut state = TimerState::running();
        assert!(!state.tick());
        assert_eq!(state.remaining_millis, 299_000);
        assert_eq!(state.label(), "4:59");

        state.remaining_millis = TICK_MILLIS;
        assert!(state.tick());
        assert_eq!(state.remaining_millis, 0);
        assert!(state.is_finished());

        // finished states ignore further ticks
        assert!(!state.tick());
        assert_eq!(state.remaining_millis, 0);
    }

    #[test]
    fn test_tick_ignored_when_not_running() {
        let mut state = TimerState::new();
        assert!(!state.tick());
        assert_eq!(state, TimerState::new());
    }

    #[test]
    fn test_label_pads_seconds() {
        let state = TimerState {
            remaining_millis: 185_000,
            status: TimerStatus::Running,
        };
        assert_eq!(state.label(), "3:05");
        assert_eq!(TimerState::stopped().label(), "0:00");
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(TimerState::running().progress(), 1.0);
        assert_eq!(TimerState::stopped().progress(), 0.0);

        let half = TimerState {
            remaining_millis: 150_000,
            status: TimerStatus::Running,
        };
        assert!((half.progress() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(TimerState::running()).unwrap();
        assert_eq!(json["status"], "running");
        assert_eq!(json["remaining_millis"], 300_000);
    }
}
