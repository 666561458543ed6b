//! The tick loop — single-threaded, cooperative.
//!
//! Each tick drains every pending backend event, applies the transitions
//! they trigger in arrival order, and issues at most one draw.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::dashboard::{Dashboard, Redraw};
use crate::ports::{Backend, BackendEvent, Clock};

/// Highest tick rate the loop honours.
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Run the dashboard until the backend reports [`BackendEvent::Quit`].
///
/// `tick_rate_hz` is clamped to `1..=MAX_TICK_RATE_HZ`. Events queued
/// behind a `Quit` in the same batch are dropped.
///
/// # Errors
///
/// Returns the backend's error when polling or drawing fails; the loop stops
/// at that point.
pub async fn run<C, B>(
    dashboard: &mut Dashboard<C>,
    backend: &mut B,
    tick_rate_hz: u32,
) -> Result<(), B::Error>
where
    C: Clock,
    B: Backend,
{
    let tick_rate_hz = tick_rate_hz.clamp(1, MAX_TICK_RATE_HZ);
    let period = Duration::from_secs(1) / tick_rate_hz;
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    dashboard.take_redraw();
    backend.draw(dashboard.screen(), dashboard.widgets(), Redraw::Full)?;
    tracing::info!(screen = %dashboard.screen(), tick_rate_hz, "dashboard running");

    loop {
        interval.tick().await;
        dashboard.tick();

        let mut quit = false;
        for event in backend.poll_events()? {
            match event {
                BackendEvent::Interaction(interaction) => {
                    dashboard.handle(&interaction);
                }
                BackendEvent::Quit => {
                    quit = true;
                    break;
                }
            }
        }

        if let Some(redraw) = dashboard.take_redraw() {
            backend.draw(dashboard.screen(), dashboard.widgets(), redraw)?;
        }

        if quit {
            tracing::info!("quit requested, stopping dashboard");
            return Ok(());
        }
    }
}
