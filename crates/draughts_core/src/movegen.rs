//! Legal-move and capture-chain generation.
//!
//! Captures are mandatory: when a piece can jump, its plain diagonal steps
//! are withheld, and a jump must keep going while another jump is available
//! from the landing cell. Only the end points of maximal chains are offered
//! as destinations.

use std::collections::BTreeMap;

use crate::board::Board;
use crate::types::*;

/// Destinations for one piece, each mapped to the pieces captured on the
/// way there (empty for a plain step). Distinct destinations are mutually
/// exclusive choices for a single turn. Keyed by `Square` so enumeration
/// order is deterministic; when two capture paths end on the same cell the
/// later-scanned path's capture list wins.
pub type MoveSet = BTreeMap<Square, Vec<Piece>>;

/// Computes the move set for `piece` on `board`.
///
/// A man scans its two forward diagonals; a king scans all four. Each
/// diagonal holds either a plain step onto an adjacent empty cell or a jump
/// over an adjacent opponent piece onto the empty cell beyond, extended
/// recursively into multi-jump chains.
pub fn valid_moves(board: &Board, piece: Piece) -> MoveSet {
    let mut moves = MoveSet::new();

    let row_steps: &[i8] = if piece.is_king() {
        &[1, -1]
    } else {
        match piece.color {
            Color::White => &[1],
            Color::Black => &[-1],
        }
    };
    for &row_step in row_steps {
        for col_step in [-1, 1] {
            scan(board, piece.color, piece.square(), row_step, col_step, &[], &mut moves);
        }
    }

    // A piece that can capture must capture.
    if moves.values().any(|captured| !captured.is_empty()) {
        moves.retain(|_, captured| !captured.is_empty());
    }
    moves
}

/// Scans one diagonal from `from` and records what it finds in `moves`.
///
/// `carried` holds the captures accumulated on the path leading to `from`;
/// it is cloned for each branch so sibling chains never share state.
/// Returns true when this diagonal produced at least one jump, which tells
/// the caller its landing cell was not the end of the chain.
fn scan(
    board: &Board,
    color: Color,
    from: Square,
    row_step: i8,
    col_step: i8,
    carried: &[Piece],
    moves: &mut MoveSet,
) -> bool {
    let Some(next) = sq(from.row + row_step, from.col + col_step) else {
        return false;
    };

    match board.piece_at(next) {
        // Adjacent empty cell: a plain step, unless we got here by jumping.
        // A chain only extends through further jumps.
        None => {
            if carried.is_empty() {
                moves.insert(next, Vec::new());
            }
            false
        }
        // Our own piece blocks the diagonal.
        Some(other) if other.color == color => false,
        // Opponent piece: a jump if the cell beyond it is free.
        Some(victim) => {
            let Some(landing) = sq(next.row + row_step, next.col + col_step) else {
                return false;
            };
            if board.piece_at(landing).is_some() {
                return false;
            }

            let mut captured = carried.to_vec();
            captured.push(victim);

            // The chain keeps its row direction; only the column may zigzag.
            let left = scan(board, color, landing, row_step, -1, &captured, moves);
            let right = scan(board, color, landing, row_step, 1, &captured, moves);
            if !left && !right {
                moves.insert(landing, captured);
            }
            true
        }
    }
}

/// Every board reachable from `board` by one legal move of `color`:
/// for each piece in grid scan order, for each destination in its move set,
/// an independent copy with the move applied and the captures removed.
pub fn all_successors(board: &Board, color: Color) -> Vec<Board> {
    let mut successors = Vec::new();
    for piece in board.pieces(color) {
        for (to, captured) in board.valid_moves(piece) {
            let mut next = board.clone();
            next.apply_move(piece, to)
                .expect("move generator produced an illegal move");
            next.remove(&captured)
                .expect("move generator captured a piece that is not on the board");
            successors.push(next);
        }
    }
    successors
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
