use crate::engine::{
    board::Board,
    common::{BoardError, Mask, Player, Position},
    moves::MoveType,
};
use log::debug;

/// Serializable snapshot of a game between turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub white: Mask,
    pub black: Mask,
    pub current: Player,
}

/// What a click or move did to the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Selection refused: same cell again, or a capture chain is in progress.
    Ignored,
    /// A cell was selected and its moves computed.
    Selected,
    /// No move was pending on the target cell.
    NoMove,
    /// A capture landed where another capture is available; the same side moves again.
    ChainContinues,
    /// The move ended the turn and the other side is now active.
    TurnComplete(MoveType),
}

/// Turn-by-turn driver around a [`Board`]: selection, forced captures,
/// multi-jump chains and switching sides.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current: Player,
    capturing: bool,
    need_to_capture: bool,
}

impl GameSession {
    /// New game from the starting layout, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::new(), Player::White)
    }

    /// Session over an arbitrary position with `current` to move.
    pub fn with_board(board: Board, current: Player) -> Self {
        let need_to_capture = board.player_has_any_captures(current);
        Self {
            board,
            current,
            capturing: false,
            need_to_capture,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Whether the active side must capture this turn.
    pub fn need_to_capture(&self) -> bool {
        self.need_to_capture
    }

    /// Whether a multi-jump is in progress and selection is locked.
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn selected(&self) -> Option<Position> {
        self.board.selected()
    }

    /// Select `pos` and show its moves; only captures when one is mandatory.
    /// Returns `false` when the selection is refused.
    pub fn select(&mut self, pos: Position) -> bool {
        if self.board.selected() == Some(pos) || self.capturing {
            return false;
        }
        self.board.set_selected(Some(pos));
        if self.need_to_capture {
            self.board.show_possible_captures(pos, self.current);
        } else {
            self.board.show_possible_moves(pos, self.current);
        }
        debug!("{} selected {}", self.current, pos);
        true
    }

    /// Apply the move pending on `pos` and advance the turn.
    pub fn do_move(&mut self, pos: Position) -> TurnOutcome {
        let performed = self.board.do_move(pos);
        if performed == MoveType::None {
            return TurnOutcome::NoMove;
        }
        self.board.set_selected(None);

        if performed == MoveType::Capture && self.board.has_captures(pos, self.current) {
            self.capturing = true;
            self.board.set_selected(Some(pos));
            self.board.show_possible_captures(pos, self.current);
            debug!("{} continues capturing from {}", self.current, pos);
            return TurnOutcome::ChainContinues;
        }

        self.capturing = false;
        self.current = self.current.opponent();
        self.need_to_capture = self.board.player_has_any_captures(self.current);
        debug!(
            "turn passes to {} (must capture: {})",
            self.current, self.need_to_capture
        );
        TurnOutcome::TurnComplete(performed)
    }

    /// Route a click: move onto `pos` when a move is pending there, otherwise select it.
    pub fn click(&mut self, pos: Position) -> TurnOutcome {
        if self.board.possible_move(pos).is_some() {
            self.do_move(pos)
        } else if self.select(pos) {
            TurnOutcome::Selected
        } else {
            TurnOutcome::Ignored
        }
    }

    /// Snapshot of pieces and the side to move. Selection state is not kept.
    pub fn state(&self) -> GameState {
        GameState {
            white: self.board.white(),
            black: self.board.black(),
            current: self.current,
        }
    }

    /// Restore a session from a snapshot, validating the position.
    pub fn from_state(state: GameState) -> Result<Self, BoardError> {
        let board = Board::from_masks(state.white, state.black)?;
        Ok(Self::with_board(board, state.current))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
