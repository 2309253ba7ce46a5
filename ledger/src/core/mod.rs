//! Simulated time and injected providers

pub mod clock;
pub mod providers;
