//! Countdown engine: owns the timer state and the task that ticks it

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::Instant,
};
use tracing::{debug, info, warn};

use super::timer_state::{TimerState, TICK_MILLIS};
use crate::tasks::countdown_task;

/// Result of delivering one tick to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    /// The tick belonged to a countdown that was already replaced or stopped
    Stale,
    Ticked(TimerState),
    Finished(TimerState),
}

/// Bookkeeping guarded by the engine lock
#[derive(Debug, Default)]
struct Control {
    /// Bumped by every start and stop so older countdowns can recognise themselves as stale
    generation: u64,
    /// The countdown currently ticking, if any
    countdown: Option<JoinHandle<()>>,
    started: bool,
    ticks_emitted: u64,
}

/// State shared between the engine handle and its countdown task
#[derive(Debug)]
pub(crate) struct EngineShared {
    control: Mutex<Control>,
    state_tx: watch::Sender<TimerState>,
}

impl EngineShared {
    fn control(&self) -> MutexGuard<'_, Control> {
        // every critical section leaves Control consistent, so a poisoned lock is still usable
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a tick from the countdown identified by `generation`
    pub(crate) fn apply_tick(&self, generation: u64) -> TickOutcome {
        let mut control = self.control();
        if control.generation != generation {
            return TickOutcome::Stale;
        }

        let mut finished = false;
        self.state_tx.send_modify(|state| finished = state.tick());
        control.ticks_emitted += 1;

        let state = *self.state_tx.borrow();
        if finished {
            // the task exits on its own after this tick
            control.countdown = None;
            TickOutcome::Finished(state)
        } else {
            TickOutcome::Ticked(state)
        }
    }
}

/// Owns one countdown at a time and publishes its state to subscribers
#[derive(Debug)]
pub struct TimerEngine {
    shared: Arc<EngineShared>,
}

impl TimerEngine {
    /// Create an idle engine showing the full duration
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(TimerState::new());

        Self {
            shared: Arc::new(EngineShared {
                control: Mutex::new(Control::default()),
                state_tx,
            }),
        }
    }

    /// Start the countdown from the full duration, replacing any countdown in progress.
    ///
    /// Ticks are driven by the current tokio runtime; outside one the call is ignored.
    pub fn start(&self) {
        let Ok(runtime) = Handle::try_current() else {
            warn!("Start requested outside a tokio runtime, ignoring");
            return;
        };

        let mut control = self.shared.control();

        if let Some(previous) = control.countdown.take() {
            info!("Restarting countdown from full duration");
            previous.abort();
        } else {
            info!("Starting countdown");
        }

        control.generation += 1;
        control.started = true;
        self.shared.state_tx.send_replace(TimerState::running());

        let period = Duration::from_millis(TICK_MILLIS);
        let first_tick = Instant::now() + period;
        let handle = runtime.spawn(countdown_task(
            Arc::downgrade(&self.shared),
            control.generation,
            first_tick,
            period,
        ));
        control.countdown = Some(handle);
    }

    /// Cancel the countdown and reset the remaining time to zero.
    ///
    /// A no-op until the first `start`.
    pub fn stop(&self) {
        let mut control = self.shared.control();

        if !control.started {
            debug!("Stop requested before any countdown was started, ignoring");
            return;
        }

        control.generation += 1;
        if let Some(countdown) = control.countdown.take() {
            info!("Stopping countdown");
            countdown.abort();
        }

        self.shared.state_tx.send_if_modified(|state| {
            let stopped = TimerState::stopped();
            if *state == stopped {
                false
            } else {
                *state = stopped;
                true
            }
        });
    }

    /// Subscribe to the latest published state
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.state_tx.subscribe()
    }

    /// Get the latest published state
    pub fn snapshot(&self) -> TimerState {
        *self.shared.state_tx.borrow()
    }

    /// Total ticks published over the engine's life
    pub fn ticks_emitted(&self) -> u64 {
        self.shared.control().ticks_emitted
    }

    /// Check if a countdown was ever started
    pub fn has_started(&self) -> bool {
        self.shared.control().started
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        if let Some(countdown) = self.shared.control().countdown.take() {
            countdown.abort();
        }
    }
}
