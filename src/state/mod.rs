//! State management module
//!
//! This module contains all light-related structures and their management logic.

pub mod app_state;
pub mod controller;
pub mod counter;
pub mod durations;
pub mod light_state;
pub mod phase;


// Re-export main types
pub use app_state::AppState;
pub use controller::LightController;
pub use counter::CounterState;
pub use durations::{DurationSet, PendingInput};
pub use light_state::LightState;
pub use phase::Phase;
