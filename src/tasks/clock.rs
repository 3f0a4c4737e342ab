//! Per-light clock background task

use std::{sync::Arc, time::Duration};

use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::LightState;

/// Background task that drives one light's countdown at a one-second cadence
///
/// While the light is paused no interval exists at all, so ticks cannot
/// accumulate; resuming builds a fresh cadence whose first decrement lands a
/// full second after the resume.
pub async fn light_clock_task(light: Arc<LightState>, mut shutdown_rx: watch::Receiver<bool>) {
    info!("Starting clock task for light {}", light.id);

    let mut updates = light.subscribe();

    loop {
        // Wait without a cadence while the light is paused
        while updates.borrow_and_update().paused {
            tokio::select! {
                changed = updates.changed() => {
                    if changed.is_err() {
                        info!("Update channel closed, stopping clock for light {}", light.id);
                        return;
                    }
                }
                _ = shutdown_rx.changed() => {
                    info!("Shutdown requested, stopping clock for light {}", light.id);
                    return;
                }
            }
        }

        debug!("Light {} running, starting one-second cadence", light.id);
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of a fresh interval completes immediately; consume
        // it so the next one lands a full second from now.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = light.on_tick() {
                        error!("Clock tick failed for light {}: {}", light.id, e);
                    }
                }

                changed = updates.changed() => {
                    if changed.is_err() {
                        info!("Update channel closed, stopping clock for light {}", light.id);
                        return;
                    }
                    if updates.borrow_and_update().paused {
                        debug!("Light {} paused, dropping its cadence", light.id);
                        break;
                    }
                }

                _ = shutdown_rx.changed() => {
                    info!("Shutdown requested, stopping clock for light {}", light.id);
                    return;
                }
            }
        }
    }
}
