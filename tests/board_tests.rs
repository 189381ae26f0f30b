use checkers::{Board, CellState, Move, MoveType, Player, Position, PIECES_PER_SIDE};

fn p(x: u8, y: u8) -> Position {
    Position::new(x, y).unwrap()
}

#[test]
fn test_initial_layout() {
    let board = Board::new();
    for pos in Position::all() {
        let expected = match pos.y() {
            0..=2 if pos.is_dark() => CellState::BlackPiece,
            5..=7 if pos.is_dark() => CellState::WhitePiece,
            _ => CellState::Empty,
        };
        assert_eq!(board.state(pos), expected, "cell {}", pos);
    }
    assert_eq!(board.piece_count(Player::Black), PIECES_PER_SIDE);
    assert_eq!(board.piece_count(Player::White), PIECES_PER_SIDE);
    assert!(board.possible_moves().is_empty());
    assert_eq!(board.selected(), None);
}

#[test]
fn test_initial_white_moves_from_c6() {
    let mut board = Board::new();
    assert!(!board.has_captures(p(2, 5), Player::White));
    board.show_possible_moves(p(2, 5), Player::White);

    let moves = board.possible_moves();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves.get(p(1, 4)), Some(Move::Plain { from: p(2, 5) }));
    assert_eq!(moves.get(p(3, 4)), Some(Move::Plain { from: p(2, 5) }));
    assert_eq!(board.possible_move_owner(p(1, 4)), Some(Player::White));
}

#[test]
fn test_black_moves_toward_increasing_y() {
    let mut board = Board::empty();
    board.place(p(3, 2), CellState::BlackPiece);
    board.show_possible_moves(p(3, 2), Player::Black);
    let targets: Vec<_> = board.possible_moves().destinations(MoveType::Plain).collect();
    assert_eq!(targets, vec![p(2, 3), p(4, 3)]);
}

#[test]
fn test_plain_moves_skip_occupied_and_off_board() {
    let mut board = Board::empty();
    // White on the left edge, one forward diagonal blocked by a friend
    board.place(p(0, 5), CellState::WhitePiece);
    board.place(p(1, 4), CellState::WhitePiece);
    board.show_possible_moves(p(0, 5), Player::White);
    assert!(board.possible_moves().is_empty());

    // Back row piece cannot step off the board
    let mut board = Board::empty();
    board.place(p(1, 0), CellState::WhitePiece);
    board.show_possible_moves(p(1, 0), Player::White);
    assert!(board.possible_moves().is_empty());
}

#[test]
fn test_capture_requires_enemy_and_empty_landing() {
    let mut board = Board::empty();
    board.place(p(3, 4), CellState::WhitePiece);
    board.place(p(2, 3), CellState::BlackPiece);
    assert!(board.has_captures(p(3, 4), Player::White));

    // Landing occupied
    board.place(p(1, 2), CellState::BlackPiece);
    assert!(!board.has_captures(p(3, 4), Player::White));

    // Friendly piece cannot be jumped
    let mut board = Board::empty();
    board.place(p(3, 4), CellState::WhitePiece);
    board.place(p(2, 3), CellState::WhitePiece);
    assert!(!board.has_captures(p(3, 4), Player::White));

    // Landing off the board
    let mut board = Board::empty();
    board.place(p(1, 2), CellState::WhitePiece);
    board.place(p(0, 1), CellState::BlackPiece);
    assert!(!board.has_captures(p(1, 2), Player::White));
}

#[test]
fn test_capture_scan_covers_all_four_diagonals() {
    let mut board = Board::empty();
    board.place(p(3, 4), CellState::WhitePiece);
    board.place(p(2, 3), CellState::BlackPiece);
    board.place(p(4, 3), CellState::BlackPiece);
    board.place(p(2, 5), CellState::BlackPiece);
    board.place(p(4, 5), CellState::BlackPiece);

    board.show_possible_captures(p(3, 4), Player::White);
    let moves = board.possible_moves();
    assert_eq!(moves.len(), 4);
    assert_eq!(
        moves.get(p(5, 6)),
        Some(Move::Capture {
            from: p(3, 4),
            captured: p(4, 5)
        })
    );
    assert_eq!(
        moves.get(p(1, 2)),
        Some(Move::Capture {
            from: p(3, 4),
            captured: p(2, 3)
        })
    );
}

#[test]
fn test_not_owned_cell_has_no_moves() {
    let mut board = Board::new();
    board.show_possible_moves(p(2, 5), Player::White);
    assert!(!board.possible_moves().is_empty());

    // Black piece queried for White: slots end cleared
    board.show_possible_moves(p(1, 2), Player::White);
    assert!(board.possible_moves().is_empty());
    board.show_possible_captures(p(1, 2), Player::White);
    assert!(board.possible_moves().is_empty());

    // Empty cell
    board.show_possible_moves(p(0, 3), Player::Black);
    assert!(board.possible_moves().is_empty());
    assert!(!board.has_captures(p(0, 3), Player::Black));
}

#[test]
fn test_has_captures_false_for_opponent_piece() {
    let mut board = Board::empty();
    board.place(p(3, 4), CellState::WhitePiece);
    board.place(p(2, 3), CellState::BlackPiece);
    assert!(board.has_captures(p(3, 4), Player::White));
    assert!(!board.has_captures(p(3, 4), Player::Black));
    assert!(board.player_has_any_captures(Player::White));
    // Black at (2, 3) can jump White at (3, 4) onto (4, 5)
    assert!(board.player_has_any_captures(Player::Black));
}

#[test]
fn test_player_has_any_captures_initial() {
    let board = Board::new();
    assert!(!board.player_has_any_captures(Player::White));
    assert!(!board.player_has_any_captures(Player::Black));
}

#[test]
fn test_show_possible_moves_overlays_captures() {
    let mut board = Board::empty();
    board.place(p(5, 6), CellState::WhitePiece);
    board.place(p(4, 5), CellState::BlackPiece);
    board.show_possible_moves(p(5, 6), Player::White);
    let moves = board.possible_moves();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves.get(p(6, 5)), Some(Move::Plain { from: p(5, 6) }));
    assert_eq!(
        moves.get(p(3, 4)),
        Some(Move::Capture {
            from: p(5, 6),
            captured: p(4, 5)
        })
    );
}

#[test]
fn test_show_is_idempotent() {
    let mut board = Board::new();
    board.show_possible_moves(p(2, 5), Player::White);
    let once = *board.possible_moves();
    board.show_possible_moves(p(2, 5), Player::White);
    assert_eq!(*board.possible_moves(), once);

    board.show_possible_captures(p(2, 5), Player::White);
    board.show_possible_captures(p(2, 5), Player::White);
    assert!(board.possible_moves().is_empty());
}

#[test]
fn test_new_selection_clears_previous_slots() {
    let mut board = Board::new();
    board.show_possible_moves(p(2, 5), Player::White);
    board.show_possible_moves(p(6, 5), Player::White);
    let targets: Vec<_> = board.possible_moves().iter().map(|(to, _)| to).collect();
    assert_eq!(targets, vec![p(5, 4), p(7, 4)]);
}

#[test]
fn test_pure_queries_do_not_touch_slots() {
    let board = Board::new();
    let moves = board.legal_moves(p(2, 5), Player::White);
    assert_eq!(moves.len(), 2);
    assert!(board.possible_moves().is_empty());
    assert!(board.possible_captures(p(2, 5), Player::White).is_empty());
}

#[test]
fn test_plain_move_application() {
    let mut board = Board::new();
    board.show_possible_moves(p(2, 5), Player::White);
    assert_eq!(board.do_move(p(1, 4)), MoveType::Plain);
    assert_eq!(board.state(p(2, 5)), CellState::Empty);
    assert_eq!(board.state(p(1, 4)), CellState::WhitePiece);
    assert!(board.possible_moves().is_empty());
    assert_eq!(board.piece_count(Player::White), PIECES_PER_SIDE);
    assert_eq!(board.piece_count(Player::Black), PIECES_PER_SIDE);
}

#[test]
fn test_capture_application_removes_captured_piece() {
    let mut board = Board::empty();
    board.place(p(5, 6), CellState::WhitePiece);
    board.place(p(4, 5), CellState::BlackPiece);
    board.show_possible_captures(p(5, 6), Player::White);

    assert_eq!(board.do_move(p(3, 4)), MoveType::Capture);
    assert_eq!(board.state(p(5, 6)), CellState::Empty);
    assert_eq!(board.state(p(4, 5)), CellState::Empty);
    assert_eq!(board.state(p(3, 4)), CellState::WhitePiece);
    assert_eq!(board.piece_count(Player::Black), 0);
    assert!(board.possible_moves().is_empty());
}

#[test]
fn test_do_move_without_pending_move_is_noop() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(board.do_move(p(1, 4)), MoveType::None);
    assert_eq!(board, before);

    // Pending slots on other cells survive a miss
    board.show_possible_moves(p(2, 5), Player::White);
    assert_eq!(board.do_move(p(0, 3)), MoveType::None);
    assert_eq!(board.possible_moves().len(), 2);
}

#[test]
fn test_cell_view() {
    let mut board = Board::new();
    board.set_selected(Some(p(2, 5)));
    board.show_possible_moves(p(2, 5), Player::White);

    let selected = board.cell(p(2, 5));
    assert!(selected.selected);
    assert_eq!(selected.state, CellState::WhitePiece);
    assert_eq!(selected.possible_move, None);

    let target = board.cell(p(3, 4));
    assert!(!target.selected);
    assert_eq!(target.possible_move, Some(Move::Plain { from: p(2, 5) }));
}

#[test]
fn test_place_overwrites_occupant() {
    let mut board = Board::empty();
    board.place(p(1, 0), CellState::BlackPiece);
    board.place(p(1, 0), CellState::WhitePiece);
    assert_eq!(board.state(p(1, 0)), CellState::WhitePiece);
    assert!((board.white() & board.black()).is_empty());
    board.place(p(1, 0), CellState::Empty);
    assert_eq!(board.piece_count(Player::White), 0);
}

#[test]
fn test_position_bounds() {
    assert!(Position::new(8, 0).is_err());
    assert!(Position::new(0, 8).is_err());
    assert_eq!(p(0, 0).offset(-1, 1), None);
    assert_eq!(p(7, 7).offset(1, -1), None);
    assert_eq!(p(3, 4).offset(1, -1), Some(p(4, 3)));
    assert!(p(1, 0).is_dark());
    assert!(!p(0, 0).is_dark());
    assert_eq!(Position::all().count(), 64);
}
