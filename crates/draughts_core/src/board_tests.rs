use super::*;

/// Recounts the grid and checks every counter against it.
fn assert_counts_match_grid(board: &Board) {
    let white = board.pieces(Color::White);
    let black = board.pieces(Color::Black);
    assert_eq!(board.white_count(), white.len() as u32);
    assert_eq!(board.black_count(), black.len() as u32);
    assert_eq!(
        board.white_kings(),
        white.iter().filter(|p| p.is_king()).count() as u32
    );
    assert_eq!(
        board.black_kings(),
        black.iter().filter(|p| p.is_king()).count() as u32
    );
}

#[test]
fn test_startpos_layout() {
    let board = Board::new();
    assert_eq!(board.white_count(), 12);
    assert_eq!(board.black_count(), 12);
    assert_eq!(board.white_kings(), 0);
    assert_eq!(board.black_kings(), 0);
    assert_eq!(board.evaluate(), 0.0);
    assert_eq!(board.winner(), None);

    // White fills the dark squares of the first three rows, Black the last three.
    assert_eq!(
        board.piece_at(Square::new(0, 1)),
        Some(Piece::man(Color::White, 0, 1))
    );
    assert_eq!(
        board.piece_at(Square::new(1, 0)),
        Some(Piece::man(Color::White, 1, 0))
    );
    assert_eq!(
        board.piece_at(Square::new(7, 0)),
        Some(Piece::man(Color::Black, 7, 0))
    );
    assert_eq!(board.piece_at(Square::new(0, 0)), None);
    assert_eq!(board.piece_at(Square::new(3, 4)), None);
    assert_counts_match_grid(&board);
}

#[test]
fn test_pieces_in_scan_order() {
    let board = Board::new();
    let white = board.pieces(Color::White);
    assert_eq!(white.len(), 12);
    assert_eq!(white[0].square(), Square::new(0, 1));
    assert_eq!(white[11].square(), Square::new(2, 7));

    let black = board.pieces(Color::Black);
    assert_eq!(black[0].square(), Square::new(5, 0));
    assert_eq!(black[11].square(), Square::new(7, 6));
}

#[test]
fn test_apply_move_relocates() {
    let mut board = Board::from_diagram(
        "........\n\
         ........\n\
         ........\n\
         ....w...\n\
         ........\n\
         ........\n\
         ........\n\
         ........",
    );
    let piece = board.piece_at(Square::new(3, 4)).unwrap();
    let moved = board.apply_move(piece, Square::new(4, 5)).unwrap();

    assert_eq!(moved, Piece::man(Color::White, 4, 5));
    assert_eq!(board.piece_at(Square::new(3, 4)), None);
    assert_eq!(board.piece_at(Square::new(4, 5)), Some(moved));
    assert_eq!(board.white_count(), 1);
    assert_eq!(board.white_kings(), 0);
    assert_counts_match_grid(&board);
}

#[test]
fn test_white_promotion_on_last_row() {
    let mut board = Board::from_diagram(
        "........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ...w....\n\
         ........",
    );
    assert_eq!(board.evaluate(), 1.0);

    let piece = board.piece_at(Square::new(6, 3)).unwrap();
    let moved = board.apply_move(piece, Square::new(7, 2)).unwrap();

    assert!(moved.is_king());
    assert_eq!(board.white_kings(), 1);
    assert_eq!(board.evaluate(), 1.5);
    assert_counts_match_grid(&board);
}

#[test]
fn test_black_promotion_on_first_row() {
    let mut board = Board::from_diagram(
        "........\n\
         ....b...\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........",
    );
    let piece = board.piece_at(Square::new(1, 4)).unwrap();
    let moved = board.apply_move(piece, Square::new(0, 3)).unwrap();

    assert!(moved.is_king());
    assert_eq!(board.black_kings(), 1);
    assert_eq!(board.evaluate(), -1.5);
    assert_counts_match_grid(&board);
}

#[test]
fn test_king_not_crowned_on_own_back_row() {
    // A white king returning to row 0 keeps its single crown.
    let mut board = Board::from_diagram(
        "........\n\
         ..W.....\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........",
    );
    assert_eq!(board.white_kings(), 1);

    let piece = board.piece_at(Square::new(1, 2)).unwrap();
    let moved = board.apply_move(piece, Square::new(0, 1)).unwrap();

    assert!(moved.is_king());
    assert_eq!(board.white_kings(), 1);
    assert_counts_match_grid(&board);
}

#[test]
fn test_king_not_crowned_twice_on_promotion_row() {
    let mut board = Board::from_diagram(
        "........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ...W....\n\
         ........",
    );
    let piece = board.piece_at(Square::new(6, 3)).unwrap();
    board.apply_move(piece, Square::new(7, 4)).unwrap();
    assert_eq!(board.white_kings(), 1);
}

#[test]
fn test_apply_move_rejections_leave_board_unchanged() {
    let board = Board::new();
    let piece = board.piece_at(Square::new(2, 1)).unwrap();

    let mut b = board.clone();
    assert_eq!(
        b.apply_move(piece, Square::new(8, 0)),
        Err(BoardError::OutOfBounds { row: 8, col: 0 })
    );
    assert_eq!(b, board);

    // Destination already occupied by a friendly piece.
    let mut b = board.clone();
    assert_eq!(
        b.apply_move(piece, Square::new(1, 0)),
        Err(BoardError::Occupied { row: 1, col: 0 })
    );
    assert_eq!(b, board);

    // Piece record pointing at an empty cell.
    let mut b = board.clone();
    let ghost = Piece::man(Color::White, 3, 4);
    assert_eq!(
        b.apply_move(ghost, Square::new(4, 5)),
        Err(BoardError::EmptySquare { row: 3, col: 4 })
    );
    assert_eq!(b, board);

    // Piece record disagreeing with what the cell holds.
    let mut b = board.clone();
    let stale = Piece::king(Color::White, 2, 1);
    assert_eq!(
        b.apply_move(stale, Square::new(3, 0)),
        Err(BoardError::StalePiece { row: 2, col: 1 })
    );
    assert_eq!(b, board);
}

#[test]
fn test_remove_decrements_once_per_piece() {
    let mut board = Board::from_diagram(
        "........\n\
         ........\n\
         ...b....\n\
         ........\n\
         .....b..\n\
         ........\n\
         .B......\n\
         ........",
    );
    assert_eq!(board.black_count(), 3);
    assert_eq!(board.black_kings(), 1);

    let captured = vec![
        Piece::man(Color::Black, 2, 3),
        Piece::man(Color::Black, 4, 5),
        Piece::king(Color::Black, 6, 1),
    ];
    board.remove(&captured).unwrap();

    assert_eq!(board.black_count(), 0);
    assert_eq!(board.black_kings(), 0);
    for piece in &captured {
        assert_eq!(board.piece_at(piece.square()), None);
    }
    assert_eq!(board.winner(), Some(Color::White));
    assert_counts_match_grid(&board);
}

#[test]
fn test_remove_validates_before_mutating() {
    let board = Board::new();
    let real = board.piece_at(Square::new(5, 0)).unwrap();
    let ghost = Piece::man(Color::Black, 4, 1);

    let mut b = board.clone();
    assert_eq!(
        b.remove(&[real, ghost]),
        Err(BoardError::EmptySquare { row: 4, col: 1 })
    );
    assert_eq!(b, board);

    // The same piece listed twice must not decrement twice.
    let mut b = board.clone();
    assert!(b.remove(&[real, real]).is_err());
    assert_eq!(b, board);
}

#[test]
fn test_winner_by_elimination() {
    let white_only = Board::from_diagram(
        "........\n\
         ........\n\
         ....w...\n\
         ........\n\
         ........\n\
         ........\n\
         ........\n\
         ........",
    );
    assert_eq!(white_only.winner(), Some(Color::White));
    assert_eq!(white_only.winner().unwrap().to_string(), "White");

    let black_only = Board::from_diagram(
        "........\n\
         ........\n\
         ........\n\
         ........\n\
         ....B...\n\
         ........\n\
         ........\n\
         ........",
    );
    assert_eq!(black_only.winner(), Some(Color::Black));
}

#[test]
fn test_diagram_display_round_trip() {
    let diagram = "\
        .w.w.w.w\n\
        w.w.w.w.\n\
        .w.w.w.w\n\
        ........\n\
        ........\n\
        b.b.b.b.\n\
        .b.b.b.b\n\
        b.b.b.b.\n";
    let board = Board::from_diagram(diagram);
    assert_eq!(board, Board::new());
    assert_eq!(board.to_string(), diagram);
}
