//! Commonly used types and utilities for ease of import.

pub use crate::{Board, CellState, GameSession, Move, MoveType, Player, Position, TurnOutcome};

#[cfg(feature = "std")]
pub use crate::cli::{parse_coord, render_board, run_hot_seat};
#[cfg(feature = "std")]
pub use crate::{decode_state, encode_state};
