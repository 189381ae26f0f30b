/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;
/// Number of rows each side fills at the start of a game.
pub const PIECE_ROWS: u8 = 3;
/// Pieces each side starts with; a side never holds more.
pub const PIECES_PER_SIDE: usize = 12;
/// Number of cells on the board.
pub const NUM_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
