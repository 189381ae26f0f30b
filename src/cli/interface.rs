#![cfg(feature = "std")]

//! Text rendering of the board and coordinate parsing for the terminal front end.

use std::fmt;

use crate::engine::{Board, CellState, GameSession, Position, BOARD_SIZE};

/// Render a position as `<column letter><row number>`, e.g. `(2, 5)` as `C6`.
pub fn coord_to_string(pos: Position) -> String {
    let col = (b'A' + pos.x()) as char;
    format!("{}{}", col, pos.y() + 1)
}

/// Parse `<column letter><row number>` (case-insensitive), columns A-H, rows 1-8.
pub fn parse_coord(input: &str) -> Result<Position, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C6)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-H", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A');
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-H", col_ch));
    }
    let row_str: String = chars.collect();
    let row: u8 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-8", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-8", row));
    }
    Position::new(col, row - 1).map_err(|e| e.to_string())
}

fn cell_char(board: &Board, pos: Position) -> char {
    if !pos.is_dark() {
        return ' ';
    }
    let cell = board.cell(pos);
    match (cell.state, cell.selected) {
        (CellState::WhitePiece, true) => 'W',
        (CellState::WhitePiece, false) => 'w',
        (CellState::BlackPiece, true) => 'B',
        (CellState::BlackPiece, false) => 'b',
        (CellState::Empty, _) if cell.possible_move.is_some() => '*',
        (CellState::Empty, _) => '.',
    }
}

/// Text view of a board with column letters and row numbers.
///
/// `w`/`b` are pieces (upper case when selected), `*` marks a possible move,
/// `.` an empty dark square; light squares stay blank.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + x) as char)?;
        }
        writeln!(f)?;
        for pos in Position::all() {
            if pos.x() == 0 {
                write!(f, "{:2} ", pos.y() + 1)?;
            }
            write!(f, " {}", cell_char(self.0, pos))?;
            if pos.x() + 1 == BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Draw the board as a string; see [`BoardView`].
pub fn render_board(board: &Board) -> String {
    BoardView(board).to_string()
}

/// One-line status: side to move and any capture obligation.
pub fn render_turn(session: &GameSession) -> String {
    let player = session.current_player();
    if session.is_capturing() {
        format!("{}'s move - continue capturing", player)
    } else if session.need_to_capture() {
        format!("{}'s move - capture is mandatory", player)
    } else {
        format!("{}'s move", player)
    }
}
