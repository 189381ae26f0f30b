//! Terminal front end
//!
//! - Board rendering and coordinate parsing
//! - Hot-seat game loop over any reader/writer pair

#![cfg(feature = "std")]

pub mod interface;
pub mod play;

pub use interface::*;
pub use play::run_hot_seat;
