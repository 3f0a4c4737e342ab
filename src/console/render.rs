//! Live display task

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::{
    display::format_countdown,
    state::{CounterState, LightState},
};

fn print_line(id: usize, counter: &CounterState) {
    println!(
        "light {} | {:<6} | {}",
        id,
        counter.phase.label(),
        format_countdown(counter.remaining_seconds, counter.paused)
    );
}

/// Background task that mirrors one light's counter onto stdout
///
/// Subscribes to the light's update channel and prints a line for the
/// starting state and for every change after it.
pub async fn light_render_task(light: Arc<LightState>, mut shutdown_rx: watch::Receiver<bool>) {
    let mut updates = light.subscribe();

    let counter = *updates.borrow_and_update();
    print_line(light.id, &counter);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    info!("Update channel closed, stopping display for light {}", light.id);
                    return;
                }
                let counter = *updates.borrow_and_update();
                print_line(light.id, &counter);
            }
            _ = shutdown_rx.changed() => {
                info!("Shutdown requested, stopping display for light {}", light.id);
                return;
            }
        }
    }
}
