//! Signal handling for clean teardown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tracing::info;

/// Wait for a termination signal (SIGINT, SIGTERM, SIGQUIT)
///
/// Resolves once the first signal arrives so the caller can stop the clock
/// and display tasks in order.
pub async fn shutdown_signal() {
    let mut signals = Signals::new(&[
        signal_hook::consts::SIGINT,
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGQUIT,
    ])
    .expect("Failed to register signal handler");

    if let Some(signal) = signals.next().await {
        info!("Received termination signal {}", signal);
    }
}
