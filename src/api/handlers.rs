//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream};
use tracing::{debug, info};

use crate::{display::render, state::AppState};
use super::responses::{ActionResponse, HealthResponse, StatusResponse};

/// Handle POST /start - Start or restart the countdown
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    let timer = state.start_timer();
    info!("Start endpoint called - countdown running from {}", timer.label());
    Json(ActionResponse::new("Countdown started".to_string(), timer))
}

/// Handle POST /stop - Cancel the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ActionResponse> {
    let was_started = state.engine.has_started();
    let timer = state.stop_timer();

    let message = if was_started {
        info!("Stop endpoint called - countdown cleared");
        "Countdown stopped"
    } else {
        info!("Stop endpoint called before any countdown, nothing to stop");
        "No countdown has been started"
    };
    Json(ActionResponse::new(message.to_string(), timer))
}

/// Handle GET /status - Return the current timer and rendered frame
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.engine.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        timer,
        frame: render(&timer),
        ticks_emitted: state.engine.ticks_emitted(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /events - Stream every published timer state as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    debug!("Events subscriber connected");
    let state_rx = state.engine.subscribe();

    // the current value goes out first, then one event per change
    let events = stream::unfold((state_rx, true), |(mut state_rx, first)| async move {
        if !first {
            state_rx.changed().await.ok()?;
        }
        let timer = *state_rx.borrow_and_update();
        let event = Event::default().event("state").json_data(timer);
        Some((event, (state_rx, false)))
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
