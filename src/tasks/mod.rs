//! Background tasks module
//!
//! This module contains background tasks that run alongside the console.

pub mod clock;

// Re-export main functions
pub use clock::light_clock_task;
