//! Draughts rule engine (no_std compatible)
//!
//! Pure game logic: board representation, move generation, forced captures,
//! move application and the turn state machine. Depends only on num-traits
//! and the `log` facade, so it can be embedded or compiled to WebAssembly.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod moves;

pub use bitboard::BitBoard;
pub use board::{dark_squares, Board, Cell};
pub use common::{BoardError, CellState, Mask, Player, Position};
pub use config::*;
pub use game::{GameSession, GameState, TurnOutcome};
pub use moves::{Move, MoveMap, MoveType, DIAGONALS};
