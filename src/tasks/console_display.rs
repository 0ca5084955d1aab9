//! Console renderer background task

use tracing::info;

use crate::{display::DisplayBinding, state::TimerStatus};

/// Background task that logs every frame the view would draw.
/// Returns how many countdowns it saw run out.
pub async fn console_display_task(mut binding: DisplayBinding) -> u64 {
    info!("Starting console display task");

    let frame = binding.current();
    info!("{} | {} | {:.0}%", frame.title, frame.label, frame.progress * 100.0);

    let mut finished = 0;
    while let Some(frame) = binding.changed().await {
        info!("{} | {} | {:.0}%", frame.title, frame.label, frame.progress * 100.0);

        if frame.status == TimerStatus::Finished {
            info!("Time is up");
            finished += 1;
        }
    }

    info!("Timer engine gone, console display task exiting");
    finished
}
