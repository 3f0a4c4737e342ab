//! End-to-end tests over the public light API

use std::{sync::Arc, time::Duration};

use tokio::sync::watch;

use stoplight::{light_clock_task, state::Phase, AppState, LightState};

#[test]
fn full_cycle_follows_the_configured_durations() {
    let light = LightState::new(0, Some(5.0), Some(3.0), Some(5.0));

    let mut seen = Vec::new();
    for _ in 0..13 {
        light.on_tick().unwrap();
        let counter = light.snapshot().unwrap().counter();
        seen.push((counter.phase, counter.remaining_seconds));
    }

    assert_eq!(
        seen,
        vec![
            (Phase::Green, 4),
            (Phase::Green, 3),
            (Phase::Green, 2),
            (Phase::Green, 1),
            (Phase::Yellow, 3),
            (Phase::Yellow, 2),
            (Phase::Yellow, 1),
            (Phase::Red, 5),
            (Phase::Red, 4),
            (Phase::Red, 3),
            (Phase::Red, 2),
            (Phase::Red, 1),
            (Phase::Green, 5),
        ]
    );
}

#[test]
fn lights_run_independently() {
    let state = AppState::new(2, Some(5.0), Some(3.0), Some(5.0));

    state.lights[0].on_tick().unwrap();
    state.lights[0].on_tick().unwrap();
    state.lights[1].toggle_paused().unwrap();
    state.lights[1].on_tick().unwrap();

    let first = state.lights[0].snapshot().unwrap().counter();
    let second = state.lights[1].snapshot().unwrap().counter();

    assert_eq!(first.remaining_seconds, 3);
    assert!(!first.paused);
    assert_eq!(second.remaining_seconds, 5);
    assert!(second.paused);
}

#[tokio::test(start_paused = true)]
async fn clock_counts_down_once_per_second_and_freezes_while_paused() {
    let light = Arc::new(LightState::new(0, Some(5.0), Some(3.0), Some(5.0)));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let clock = tokio::spawn(light_clock_task(Arc::clone(&light), shutdown_rx));

    tokio::time::sleep(Duration::from_millis(3500)).await;
    assert_eq!(light.snapshot().unwrap().counter().remaining_seconds, 2);

    // No ticks arrive while paused, no matter how long the pause lasts
    light.toggle_paused().unwrap();
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(light.snapshot().unwrap().counter().remaining_seconds, 2);

    // Resuming starts a fresh cadence: the next tick lands a full second later
    light.toggle_paused().unwrap();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(light.snapshot().unwrap().counter().remaining_seconds, 1);

    shutdown_tx.send(true).unwrap();
    clock.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn clock_rolls_to_the_next_color_at_the_boundary() {
    let light = Arc::new(LightState::new(0, Some(4.0), Some(3.0), Some(2.0)));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let clock = tokio::spawn(light_clock_task(Arc::clone(&light), shutdown_rx));

    tokio::time::sleep(Duration::from_millis(2100)).await;

    let counter = light.snapshot().unwrap().counter();
    assert_eq!(counter.phase, Phase::Yellow);
    assert_eq!(counter.remaining_seconds, 3);

    shutdown_tx.send(true).unwrap();
    clock.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn forced_skip_lands_on_the_next_color_still_running() {
    let light = Arc::new(LightState::new(0, Some(5.0), Some(3.0), Some(5.0)));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let clock = tokio::spawn(light_clock_task(Arc::clone(&light), shutdown_rx));

    tokio::time::sleep(Duration::from_millis(1500)).await;
    light.toggle_paused().unwrap();
    light.resume_and_advance().unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let counter = light.snapshot().unwrap().counter();
    assert_eq!(counter.phase, Phase::Yellow);
    assert!(!counter.paused);
    assert_eq!(counter.remaining_seconds, 2);

    shutdown_tx.send(true).unwrap();
    clock.await.unwrap();
}
