//! Stoplight - A state-managed traffic light simulator
//!
//! This library provides per-light countdown state machines that cycle
//! green, yellow and red on a one-second cadence, with pause, forced
//! advance, duration editing and reset driven from an interactive console.

pub mod config;
pub mod console;
pub mod display;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use console::{console_task, light_render_task};
pub use state::{AppState, LightController, LightState};
pub use tasks::light_clock_task;
pub use utils::signals::shutdown_signal;
