//! Reactive state contexts wiring the pure core to signals and timers.

pub mod preferences;
pub mod prices;
pub mod swap;
