//! Turn management for an interactive game.
//!
//! The UI layer reduces every human interaction to selecting a square; this
//! module turns those selections into board mutations. Every rejected
//! selection reports why and leaves the game state untouched.

use thiserror::Error;

use crate::board::Board;
use crate::movegen::MoveSet;
use crate::types::*;

/// Why a selection was rejected. The game state is unchanged in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },
    #[error("nothing to select at ({row}, {col})")]
    EmptySquare { row: i8, col: i8 },
    #[error("the piece at ({row}, {col}) belongs to the opponent")]
    OpponentPiece { row: i8, col: i8 },
    #[error("({row}, {col}) is not a destination of the selected piece")]
    NotAValidMove { row: i8, col: i8 },
    #[error("the game is over")]
    GameOver,
}

/// What an accepted selection did.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    /// A piece of the side to move is now selected and its moves computed.
    Selected(Piece),
    /// The previously selected piece was clicked again and deselected.
    Deselected,
    /// The selected piece moved to `to`, capturing `captured`, and the turn
    /// passed to the other side.
    Moved { to: Square, captured: Vec<Piece> },
}

/// One game in progress: the board, whose turn it is, and the current
/// selection with its cached move set. Black moves first.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Piece>,
    valid: MoveSet,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            selected: None,
            valid: MoveSet::new(),
        }
    }

    /// Starts a game from an arbitrary position with `turn` to move.
    /// Setup helper for analysis and tests.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            selected: None,
            valid: MoveSet::new(),
        }
    }

    /// Discards the game and starts over from the initial position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    /// Destinations of the currently selected piece (empty when nothing is
    /// selected). The UI draws these as move hints.
    pub fn valid_moves(&self) -> &MoveSet {
        &self.valid
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Handles a click on `square` for the human side.
    ///
    /// With nothing selected, clicking one of the mover's pieces selects it.
    /// With a selection, clicking a cached destination plays the move and
    /// switches the turn, clicking the same piece deselects it, and clicking
    /// another piece of the mover reselects.
    pub fn select(&mut self, square: Square) -> Result<SelectOutcome, SelectError> {
        if self.winner().is_some() {
            return Err(SelectError::GameOver);
        }
        if !square.in_bounds() {
            return Err(SelectError::OutOfBounds {
                row: square.row,
                col: square.col,
            });
        }

        let clicked = self.board.piece_at(square);

        if let Some(selected) = self.selected {
            if clicked == Some(selected) {
                self.clear_selection();
                return Ok(SelectOutcome::Deselected);
            }
            match clicked {
                Some(piece) if piece.color == self.turn => {
                    return Ok(self.select_piece(piece));
                }
                _ => {
                    if let Some(captured) = self.valid.get(&square).cloned() {
                        return self.play(selected, square, captured);
                    }
                    return Err(SelectError::NotAValidMove {
                        row: square.row,
                        col: square.col,
                    });
                }
            }
        }

        match clicked {
            None => Err(SelectError::EmptySquare {
                row: square.row,
                col: square.col,
            }),
            Some(piece) if piece.color != self.turn => Err(SelectError::OpponentPiece {
                row: square.row,
                col: square.col,
            }),
            Some(piece) => Ok(self.select_piece(piece)),
        }
    }

    /// Installs a board produced by an engine search as the new game state
    /// and passes the turn. The computer side's half of the protocol.
    pub fn install(&mut self, board: Board) {
        self.board = board;
        self.switch_turn();
    }

    fn select_piece(&mut self, piece: Piece) -> SelectOutcome {
        self.selected = Some(piece);
        self.valid = self.board.valid_moves(piece);
        SelectOutcome::Selected(piece)
    }

    fn play(
        &mut self,
        piece: Piece,
        to: Square,
        captured: Vec<Piece>,
    ) -> Result<SelectOutcome, SelectError> {
        // Destinations come from the cached move set, so these cannot fail;
        // treat a failure as the stale-selection it would be.
        self.board
            .apply_move(piece, to)
            .map_err(|_| SelectError::NotAValidMove {
                row: to.row,
                col: to.col,
            })?;
        self.board
            .remove(&captured)
            .expect("cached move set captured a piece that is not on the board");
        self.switch_turn();
        Ok(SelectOutcome::Moved { to, captured })
    }

    fn switch_turn(&mut self) {
        self.clear_selection();
        self.turn = self.turn.other();
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid = MoveSet::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
