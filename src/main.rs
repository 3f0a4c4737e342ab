//! Stoplight - A state-managed traffic light simulator
//!
//! This is the main entry point for the stoplight application.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use stoplight::{
    config::Config,
    console::{console_task, light_render_task},
    state::AppState,
    tasks::light_clock_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so the light display owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("stoplight={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting stoplight simulator v0.1.0");
    info!(
        "Configuration: lights={}, red={}s, yellow={}s, green={}s",
        config.lights, config.red, config.yellow, config.green
    );

    // Create application state
    let state = Arc::new(AppState::new(
        config.lights,
        Some(config.red),
        Some(config.yellow),
        Some(config.green),
    ));

    // Shutdown fans out to every background task over a watch channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Start one clock task and one display task per light
    let mut handles = Vec::with_capacity(state.lights.len() * 2);
    for light in &state.lights {
        let clock_light = Arc::clone(light);
        let clock_shutdown = shutdown_rx.clone();
        handles.push(tokio::spawn(async move {
            light_clock_task(clock_light, clock_shutdown).await;
        }));

        let render_light = Arc::clone(light);
        let render_shutdown = shutdown_rx.clone();
        handles.push(tokio::spawn(async move {
            light_render_task(render_light, render_shutdown).await;
        }));
    }
    drop(shutdown_rx);

    // Run the console until quit, end of input, or a termination signal
    let console_state = Arc::clone(&state);
    let mut console = tokio::spawn(async move {
        console_task(console_state).await;
    });

    let console_finished = tokio::select! {
        result = &mut console => {
            if let Err(e) = result {
                tracing::error!("Console task failed: {}", e);
            }
            true
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
            false
        }
    };

    // Stop the clocks and displays and wait for their subscriptions to close
    if shutdown_tx.send(true).is_err() {
        tracing::warn!("All background tasks already stopped");
    }
    for handle in handles {
        if let Err(e) = handle.await {
            tracing::error!("Background task failed: {}", e);
        }
    }

    info!("Simulator shutdown complete");

    if !console_finished {
        // A pending stdin read cannot be cancelled; leave without waiting on it
        std::process::exit(0);
    }
    Ok(())
}
