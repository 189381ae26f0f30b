#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
pub mod cli;
pub mod domain;
pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use domain::{decode_state, encode_state, SNAPSHOT_VERSION};
