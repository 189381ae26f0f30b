//! Common types for the draughts engine: coordinates, occupancy, sides and errors.

use crate::engine::bitboard::BitBoard;
use crate::engine::config::{BOARD_SIZE, NUM_CELLS};
use core::fmt;

/// One bit per cell of the 8×8 board.
pub type Mask = BitBoard<u64, { BOARD_SIZE as usize }>;

/// A cell coordinate. `x` is the column, `y` the row; both lie in `[0, 8)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Result<Self, BoardError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Position { x, y })
        } else {
            Err(BoardError::InvalidPosition { x, y })
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    /// Step by `(dx, dy)`, or `None` when the result falls off the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y) {
            Some(Position {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Dark squares are the only cells pieces ever occupy.
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// Row-major index `y * 8 + x`.
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub(crate) fn from_index(idx: usize) -> Option<Self> {
        if idx < NUM_CELLS {
            Some(Position {
                x: (idx % BOARD_SIZE as usize) as u8,
                y: (idx / BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Single-bit mask for this cell.
    #[inline]
    pub fn mask(self) -> Mask {
        Mask::single(self.index())
    }

    /// Every cell on the board, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..NUM_CELLS).filter_map(Position::from_index)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = BoardError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(x, y)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a cell. There is no king variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    WhitePiece,
    BlackPiece,
}

impl CellState {
    /// Side owning the piece, `None` for an empty cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::WhitePiece => Some(Player::White),
            CellState::BlackPiece => Some(Player::Black),
        }
    }
}

/// A side of the game. White starts at the bottom rows (high `y`) and moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Occupancy state of this side's pieces.
    pub fn piece(self) -> CellState {
        match self {
            Player::White => CellState::WhitePiece,
            Player::Black => CellState::BlackPiece,
        }
    }

    /// Row step of a plain move: White toward decreasing `y`, Black toward increasing `y`.
    pub fn forward(self) -> i8 {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

/// Errors returned at the engine boundary. Rule queries and commands never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 8×8 board.
    InvalidPosition { x: u8, y: u8 },
    /// A cell is claimed by both sides.
    OverlappingPieces,
    /// A piece sits on a light square.
    PieceOnLightSquare,
    /// A side holds more pieces than it starts with.
    TooManyPieces,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidPosition { x, y } => {
                write!(f, "Position ({}, {}) is off the board", x, y)
            }
            BoardError::OverlappingPieces => write!(f, "A cell holds both a white and a black piece"),
            BoardError::PieceOnLightSquare => write!(f, "A piece is placed on a light square"),
            BoardError::TooManyPieces => write!(f, "A side has more than 12 pieces"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
