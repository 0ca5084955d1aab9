//! Display binding: renders published timer states into view frames

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::state::{TimerEngine, TimerState, TimerStatus};

/// Heading shown above the countdown
pub const TITLE: &str = "Count Down - 5 Minutes";

/// Image drawn above the title
pub const ICON: &str = "sand_clock";

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayFrame {
    pub icon: String,
    pub title: String,
    /// Remaining time as `m:ss`
    pub label: String,
    /// Fill of the circular progress indicator, 1.0 at full time
    pub progress: f32,
    pub status: TimerStatus,
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

/// Render a timer state into a frame
pub fn render(state: &TimerState) -> DisplayFrame {
    DisplayFrame {
        icon: ICON.to_string(),
        title: TITLE.to_string(),
        label: state.label(),
        progress: state.progress(),
        status: state.status,
        // start always restarts and stop is at worst a no-op
        start_enabled: true,
        stop_enabled: true,
    }
}

/// Read-only view of the engine's state
#[derive(Debug, Clone)]
pub struct DisplayBinding {
    state_rx: watch::Receiver<TimerState>,
}

impl DisplayBinding {
    pub fn new(engine: &TimerEngine) -> Self {
        Self {
            state_rx: engine.subscribe(),
        }
    }

    /// Frame for the latest published state
    pub fn current(&self) -> DisplayFrame {
        render(&self.state_rx.borrow())
    }

    /// Wait for the next published state and render it.
    /// Returns `None` once the engine has been dropped.
    pub async fn changed(&mut self) -> Option<DisplayFrame> {
        self.state_rx.changed().await.ok()?;
        let state = *self.state_rx.borrow_and_update();
        Some(render(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_render_initial_state() {
        let frame = render(&TimerState::new());
        assert_eq!(frame.icon, ICON);
        assert_eq!(frame.title, TITLE);
        assert_eq!(frame.label, "5:00");
        assert_eq!(frame.progress, 1.0);
        assert_eq!(frame.status, TimerStatus::Idle);
        assert!(frame.start_enabled && frame.stop_enabled);
    }

    #[test]
    fn test_render_stopped_state() {
        let frame = render(&TimerState::stopped());
        assert_eq!(frame.label, "0:00");
        assert_eq!(frame.progress, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_binding_follows_engine() {
        let engine = TimerEngine::new();
        let mut binding = DisplayBinding::new(&engine);
        assert_eq!(binding.current().label, "5:00");

        engine.start();
        let frame = binding.changed().await.unwrap();
        assert_eq!(frame.status, TimerStatus::Running);
        assert_eq!(frame.label, "5:00");

        let frame = binding.changed().await.unwrap();
        assert_eq!(frame.label, "4:59");

        tokio::time::sleep(Duration::from_millis(100)).await;
        engine.stop();
        let frame = binding.changed().await.unwrap();
        assert_eq!(frame.label, "0:00");
        assert_eq!(frame.status, TimerStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_binding_ends_with_engine() {
        let engine = TimerEngine::new();
        let mut binding = DisplayBinding::new(&engine);
        drop(engine);
        assert!(binding.changed().await.is_none());
    }
}
