//! Repeating countdown task

use std::{sync::Weak, time::Duration};
use tokio::time::{interval_at, Instant};
use tracing::{debug, info};

use crate::state::timer_engine::{EngineShared, TickOutcome};

/// Background task that delivers one tick per `period` to the engine until the
/// countdown finishes, is superseded, or the engine goes away
pub(crate) async fn countdown_task(
    engine: Weak<EngineShared>,
    generation: u64,
    first_tick: Instant,
    period: Duration,
) {
    debug!("Countdown task {} scheduled", generation);

    let mut interval = interval_at(first_tick, period);

    loop {
        interval.tick().await;

        let Some(shared) = engine.upgrade() else {
            debug!("Engine dropped, countdown task {} exiting", generation);
            break;
        };

        match shared.apply_tick(generation) {
            TickOutcome::Ticked(state) => debug!("Tick: {} remaining", state.label()),
            TickOutcome::Finished(state) => {
                info!("Countdown finished at {}", state.label());
                break;
            }
            TickOutcome::Stale => {
                debug!("Countdown task {} superseded", generation);
                break;
            }
        }
    }
}
