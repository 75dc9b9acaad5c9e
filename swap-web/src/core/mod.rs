//! Pure swap core: no signals, no timers, no browser APIs.
//!
//! Everything here is deterministic and synchronous; the reactive layer in
//! [`crate::state`] wires these pieces to signals and wall-clock timers.

pub mod lifecycle;
pub mod quote;
pub mod selection;
pub mod validate;
