use std::fmt;

use thiserror::Error;

use crate::movegen::{self, MoveSet};
use crate::types::*;

/// Errors from the board's mutating operations. Every operation validates
/// its inputs before touching the grid, so a returned error guarantees the
/// board is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },
    #[error("no piece at ({row}, {col})")]
    EmptySquare { row: i8, col: i8 },
    #[error("destination ({row}, {col}) is occupied")]
    Occupied { row: i8, col: i8 },
    #[error("piece record does not match the board at ({row}, {col})")]
    StalePiece { row: i8, col: i8 },
}

/// The draughts board: an 8x8 grid of cells plus material counters.
///
/// Invariants maintained by every operation:
/// - a piece's stored (row, col) equals its grid location,
/// - at most one piece occupies any cell,
/// - the counters equal the number of matching pieces on the grid.
///
/// Cloning copies the flat grid by value, so the search can branch cheaply.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: [[Option<Piece>; COLS as usize]; ROWS as usize],
    white_count: u32,
    black_count: u32,
    white_kings: u32,
    black_kings: u32,
}

impl Board {
    /// Standard starting layout: 12 White men on the dark squares of the
    /// first three rows, 12 Black men on the last three.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..ROWS {
            // (row + 1) % 2 selects the dark column of each row.
            let mut col = (row + 1) % 2;
            while col < COLS {
                if row < 3 {
                    board.put(Piece::man(Color::White, row, col));
                } else if row > 4 {
                    board.put(Piece::man(Color::Black, row, col));
                }
                col += 2;
            }
        }
        board
    }

    /// A board with no pieces. Starting point for test positions.
    pub fn empty() -> Self {
        Self {
            grid: [[None; COLS as usize]; ROWS as usize],
            white_count: 0,
            black_count: 0,
            white_kings: 0,
            black_kings: 0,
        }
    }

    /// Parses a board picture: 8 lines of 8 characters, `.` for an empty
    /// cell, `w`/`b` for men and `W`/`B` for kings. Counters are recomputed
    /// from the pieces placed. Panics on malformed input; this is a test
    /// and diagnostics helper, not a user-facing parser.
    pub fn from_diagram(diagram: &str) -> Self {
        let mut board = Self::empty();
        let lines: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        assert!(
            lines.len() == ROWS as usize,
            "diagram must have {} rows, got {}",
            ROWS,
            lines.len()
        );

        for (row, line) in lines.iter().enumerate() {
            assert!(
                line.chars().count() == COLS as usize,
                "diagram row {} must have {} cells",
                row,
                COLS
            );
            for (col, ch) in line.chars().enumerate() {
                let (row, col) = (row as i8, col as i8);
                match ch {
                    '.' => {}
                    'w' => board.put(Piece::man(Color::White, row, col)),
                    'W' => board.put(Piece::king(Color::White, row, col)),
                    'b' => board.put(Piece::man(Color::Black, row, col)),
                    'B' => board.put(Piece::king(Color::Black, row, col)),
                    _ => panic!("invalid cell char in diagram: {:?}", ch),
                }
            }
        }
        board
    }

    /// Places a piece on its own square and bumps the counters.
    /// Internal: setup only, the square must be empty.
    fn put(&mut self, piece: Piece) {
        debug_assert!(piece.square().in_bounds());
        debug_assert!(self.grid[piece.row as usize][piece.col as usize].is_none());
        self.grid[piece.row as usize][piece.col as usize] = Some(piece);
        match piece.color {
            Color::White => self.white_count += 1,
            Color::Black => self.black_count += 1,
        }
        if piece.is_king() {
            match piece.color {
                Color::White => self.white_kings += 1,
                Color::Black => self.black_kings += 1,
            }
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize]
    }

    /// All pieces of `color` currently on the grid, in row-major scan order.
    /// The scan order is part of the search's deterministic tie-break.
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        let mut pieces = Vec::new();
        for row in &self.grid {
            for cell in row {
                if let Some(piece) = cell
                    && piece.color == color
                {
                    pieces.push(*piece);
                }
            }
        }
        pieces
    }

    pub fn white_count(&self) -> u32 {
        self.white_count
    }

    pub fn black_count(&self) -> u32 {
        self.black_count
    }

    pub fn white_kings(&self) -> u32 {
        self.white_kings
    }

    pub fn black_kings(&self) -> u32 {
        self.black_kings
    }

    /// Relocates `piece` to the empty square `to`, crowning it when it lands
    /// on its own color's promotion row. Returns the piece as it stands
    /// after the move. The destination check is against the piece's own
    /// direction of travel: a king returning to its first row is not
    /// crowned twice, and a man can only be crowned on the far side.
    pub fn apply_move(&mut self, piece: Piece, to: Square) -> Result<Piece, BoardError> {
        let from = piece.square();
        if !from.in_bounds() {
            return Err(BoardError::OutOfBounds {
                row: from.row,
                col: from.col,
            });
        }
        if !to.in_bounds() {
            return Err(BoardError::OutOfBounds {
                row: to.row,
                col: to.col,
            });
        }
        match self.grid[from.row as usize][from.col as usize] {
            None => {
                return Err(BoardError::EmptySquare {
                    row: from.row,
                    col: from.col,
                });
            }
            Some(present) if present != piece => {
                return Err(BoardError::StalePiece {
                    row: from.row,
                    col: from.col,
                });
            }
            Some(_) => {}
        }
        if self.grid[to.row as usize][to.col as usize].is_some() {
            return Err(BoardError::Occupied {
                row: to.row,
                col: to.col,
            });
        }

        let moved = piece.moved_to(to);
        self.grid[from.row as usize][from.col as usize] = None;
        self.grid[to.row as usize][to.col as usize] = Some(moved);
        if moved.is_king() && !piece.is_king() {
            match moved.color {
                Color::White => self.white_kings += 1,
                Color::Black => self.black_kings += 1,
            }
        }
        Ok(moved)
    }

    /// Deletes every listed piece from the grid, decrementing the owning
    /// color's counter once per removed piece (and the king counter for
    /// removed kings). Validation runs before any mutation, so either every
    /// piece is removed or the board is untouched.
    pub fn remove(&mut self, pieces: &[Piece]) -> Result<(), BoardError> {
        for (i, piece) in pieces.iter().enumerate() {
            let square = piece.square();
            if !square.in_bounds() {
                return Err(BoardError::OutOfBounds {
                    row: square.row,
                    col: square.col,
                });
            }
            match self.grid[square.row as usize][square.col as usize] {
                None => {
                    return Err(BoardError::EmptySquare {
                        row: square.row,
                        col: square.col,
                    });
                }
                Some(present) if present != *piece => {
                    return Err(BoardError::StalePiece {
                        row: square.row,
                        col: square.col,
                    });
                }
                Some(_) => {}
            }
            // The same cell listed twice would decrement its counter twice.
            if pieces[..i].iter().any(|p| p.square() == square) {
                return Err(BoardError::StalePiece {
                    row: square.row,
                    col: square.col,
                });
            }
        }

        for piece in pieces {
            self.grid[piece.row as usize][piece.col as usize] = None;
            match piece.color {
                Color::White => self.white_count -= 1,
                Color::Black => self.black_count -= 1,
            }
            if piece.is_king() {
                match piece.color {
                    Color::White => self.white_kings -= 1,
                    Color::Black => self.black_kings -= 1,
                }
            }
        }
        Ok(())
    }

    /// Static evaluation: material plus a half-point bonus per king.
    /// White maximizes this score, Black minimizes it.
    pub fn evaluate(&self) -> f32 {
        (self.white_count as f32 - self.black_count as f32)
            + 0.5 * (self.white_kings as f32 - self.black_kings as f32)
    }

    /// The winner by elimination, if any. Both counts cannot reach zero in
    /// the same game because a capture only ever removes opponent pieces.
    pub fn winner(&self) -> Option<Color> {
        if self.black_count == 0 {
            Some(Color::White)
        } else if self.white_count == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Legal destinations for `piece`, including capture chains.
    pub fn valid_moves(&self, piece: Piece) -> MoveSet {
        movegen::valid_moves(self, piece)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let ch = match cell {
                    None => '.',
                    Some(p) => match (p.color, p.kind) {
                        (Color::White, PieceKind::Man) => 'w',
                        (Color::White, PieceKind::King) => 'W',
                        (Color::Black, PieceKind::Man) => 'b',
                        (Color::Black, PieceKind::King) => 'B',
                    },
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
