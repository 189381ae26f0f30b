//! Move descriptors and the per-cell map of possible moves.

use crate::engine::common::Position;
use crate::engine::config::NUM_CELLS;

/// The four diagonal steps, scanned in this order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// A move that ends on the cell whose slot holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Single diagonal step onto an empty cell.
    Plain { from: Position },
    /// Jump over the enemy piece at `captured`.
    Capture { from: Position, captured: Position },
}

impl Move {
    /// Cell the moving piece starts on.
    pub fn origin(&self) -> Position {
        match *self {
            Move::Plain { from } | Move::Capture { from, .. } => from,
        }
    }

    pub fn kind(&self) -> MoveType {
        match self {
            Move::Plain { .. } => MoveType::Plain,
            Move::Capture { .. } => MoveType::Capture,
        }
    }
}

/// Kind of move performed by `Board::do_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveType {
    /// No move was pending on the cell.
    None,
    Plain,
    Capture,
}

/// Possible-move slot for every cell, keyed by destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveMap {
    slots: [Option<Move>; NUM_CELLS],
}

impl MoveMap {
    pub fn new() -> Self {
        MoveMap {
            slots: [None; NUM_CELLS],
        }
    }

    /// Move ending on `to`, if any.
    pub fn get(&self, to: Position) -> Option<Move> {
        self.slots[to.index()]
    }

    pub fn insert(&mut self, to: Position, mv: Move) {
        self.slots[to.index()] = Some(mv);
    }

    pub fn clear(&mut self) {
        self.slots = [None; NUM_CELLS];
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// `(destination, move)` pairs, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Move)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| Some((Position::from_index(idx)?, (*slot)?)))
    }

    /// Destinations holding a move of `kind`.
    pub fn destinations(&self, kind: MoveType) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, mv)| mv.kind() == kind)
            .map(|(to, _)| to)
    }
}

impl Default for MoveMap {
    fn default() -> Self {
        Self::new()
    }
}
