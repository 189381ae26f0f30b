//! Board state and the draughts rules: move generation, forced captures and move application.

use crate::engine::common::{BoardError, CellState, Mask, Player, Position};
use crate::engine::config::{BOARD_SIZE, PIECES_PER_SIDE, PIECE_ROWS};
use crate::engine::moves::{Move, MoveMap, MoveType, DIAGONALS};
use log::{debug, trace};

/// Read-only view of a single cell, as handed to a front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub state: CellState,
    /// Highlight flag, not game logic.
    pub selected: bool,
    /// Pending move ending here, valid until the next selection or applied move.
    pub possible_move: Option<Move>,
}

/// Piece placement plus the derived possible-move slots of the last selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    white: Mask,
    black: Mask,
    possible: MoveMap,
    selected: Option<Position>,
}

/// Mask of every dark square.
pub fn dark_squares() -> Mask {
    Position::all()
        .filter(|p| p.is_dark())
        .fold(Mask::new(), |acc, p| acc | p.mask())
}

impl Board {
    /// Board with the standard starting layout: Black on the dark squares of
    /// the first three rows, White on the dark squares of the last three.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in Position::all().filter(|p| p.is_dark()) {
            if pos.y() < PIECE_ROWS {
                board.put(pos, CellState::BlackPiece);
            } else if pos.y() >= BOARD_SIZE - PIECE_ROWS {
                board.put(pos, CellState::WhitePiece);
            }
        }
        board
    }

    /// Board without any pieces.
    pub fn empty() -> Self {
        Board {
            white: Mask::new(),
            black: Mask::new(),
            possible: MoveMap::new(),
            selected: None,
        }
    }

    /// Build a board from occupancy masks, rejecting positions that cannot arise in play.
    pub fn from_masks(white: Mask, black: Mask) -> Result<Self, BoardError> {
        if !(white & black).is_empty() {
            return Err(BoardError::OverlappingPieces);
        }
        if !((white | black) & !dark_squares()).is_empty() {
            return Err(BoardError::PieceOnLightSquare);
        }
        if white.count_ones() > PIECES_PER_SIDE || black.count_ones() > PIECES_PER_SIDE {
            return Err(BoardError::TooManyPieces);
        }
        Ok(Board {
            white,
            black,
            ..Self::empty()
        })
    }

    /// Set the occupancy of a cell directly, for setting up positions.
    pub fn place(&mut self, pos: Position, state: CellState) {
        self.put(pos, state);
    }

    pub fn white(&self) -> Mask {
        self.white
    }

    pub fn black(&self) -> Mask {
        self.black
    }

    pub fn state(&self, pos: Position) -> CellState {
        let idx = pos.index();
        if self.white.test(idx) {
            CellState::WhitePiece
        } else if self.black.test(idx) {
            CellState::BlackPiece
        } else {
            CellState::Empty
        }
    }

    pub fn cell(&self, pos: Position) -> Cell {
        Cell {
            position: pos,
            state: self.state(pos),
            selected: self.selected == Some(pos),
            possible_move: self.possible.get(pos),
        }
    }

    pub fn piece_count(&self, player: Player) -> usize {
        match player {
            Player::White => self.white.count_ones(),
            Player::Black => self.black.count_ones(),
        }
    }

    /// Cells holding `player`'s pieces, row by row.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        let mask = match player {
            Player::White => &self.white,
            Player::Black => &self.black,
        };
        mask.iter_set_bits()
            .filter_map(|(x, y)| Position::new(x as u8, y as u8).ok())
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn set_selected(&mut self, pos: Option<Position>) {
        self.selected = pos;
    }

    /// Pending move ending on `pos`.
    pub fn possible_move(&self, pos: Position) -> Option<Move> {
        self.possible.get(pos)
    }

    /// All pending moves computed by the last selection.
    pub fn possible_moves(&self) -> &MoveMap {
        &self.possible
    }

    /// Side whose piece would perform the move pending on `pos`; front ends use it for highlight colour.
    pub fn possible_move_owner(&self, pos: Position) -> Option<Player> {
        self.possible
            .get(pos)
            .and_then(|mv| self.state(mv.origin()).owner())
    }

    fn owns(&self, pos: Position, player: Player) -> bool {
        self.state(pos) == player.piece()
    }

    fn put(&mut self, pos: Position, state: CellState) {
        let bit = pos.mask();
        self.white &= !bit;
        self.black &= !bit;
        match state {
            CellState::WhitePiece => self.white |= bit,
            CellState::BlackPiece => self.black |= bit,
            CellState::Empty => {}
        }
    }

    /// Capture from `from` in direction `(dx, dy)`: returns the landing cell and the move.
    fn capture_toward(&self, from: Position, (dx, dy): (i8, i8)) -> Option<(Position, Move)> {
        let mover = self.state(from).owner()?;
        let captured = from.offset(dx, dy)?;
        if self.state(captured).owner() != Some(mover.opponent()) {
            return None;
        }
        let landing = captured.offset(dx, dy)?;
        if self.state(landing) != CellState::Empty {
            return None;
        }
        Some((landing, Move::Capture { from, captured }))
    }

    /// Whether `player`'s piece at `pos` can jump in any direction.
    /// A cell not holding `player`'s piece has no captures.
    pub fn has_captures(&self, pos: Position, player: Player) -> bool {
        self.owns(pos, player)
            && DIAGONALS
                .iter()
                .any(|&dir| self.capture_toward(pos, dir).is_some())
    }

    /// Whether any of `player`'s pieces can capture, making capture mandatory this turn.
    pub fn player_has_any_captures(&self, player: Player) -> bool {
        self.pieces(player).any(|pos| self.has_captures(pos, player))
    }

    /// Captures available to `player`'s piece at `pos`, keyed by landing cell.
    pub fn possible_captures(&self, pos: Position, player: Player) -> MoveMap {
        let mut moves = MoveMap::new();
        if self.owns(pos, player) {
            self.add_captures(pos, &mut moves);
        }
        moves
    }

    /// Forward plain moves plus captures for `player`'s piece at `pos`.
    /// Forced captures are the caller's policy; both kinds are always listed.
    pub fn legal_moves(&self, pos: Position, player: Player) -> MoveMap {
        let mut moves = MoveMap::new();
        if !self.owns(pos, player) {
            return moves;
        }
        for dx in [-1, 1] {
            if let Some(to) = pos.offset(dx, player.forward()) {
                if self.state(to) == CellState::Empty {
                    moves.insert(to, Move::Plain { from: pos });
                }
            }
        }
        self.add_captures(pos, &mut moves);
        moves
    }

    fn add_captures(&self, pos: Position, moves: &mut MoveMap) {
        for dir in DIAGONALS {
            if let Some((landing, mv)) = self.capture_toward(pos, dir) {
                moves.insert(landing, mv);
            }
        }
    }

    /// Replace the possible-move slots with the captures of the piece at `pos`.
    pub fn show_possible_captures(&mut self, pos: Position, player: Player) {
        self.possible = self.possible_captures(pos, player);
        trace!("{} captures from {}: {}", player, pos, self.possible.len());
    }

    /// Replace the possible-move slots with all legal moves of the piece at `pos`.
    pub fn show_possible_moves(&mut self, pos: Position, player: Player) {
        self.possible = self.legal_moves(pos, player);
        trace!("{} moves from {}: {}", player, pos, self.possible.len());
    }

    /// Apply the move pending on `pos` and clear every slot.
    /// Returns `MoveType::None` without touching the board when nothing is pending.
    pub fn do_move(&mut self, pos: Position) -> MoveType {
        let Some(mv) = self.possible.get(pos) else {
            return MoveType::None;
        };
        match mv {
            Move::Plain { from } => self.relocate(from, pos),
            Move::Capture { from, captured } => {
                self.relocate(from, pos);
                self.put(captured, CellState::Empty);
            }
        }
        self.possible.clear();
        debug!("applied {:?} to {}", mv, pos);
        mv.kind()
    }

    fn relocate(&mut self, from: Position, to: Position) {
        let state = self.state(from);
        self.put(to, state);
        self.put(from, CellState::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
