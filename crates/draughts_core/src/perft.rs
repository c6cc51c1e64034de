use crate::board::Board;
use crate::movegen::all_successors;
use crate::types::Color;

/// Pure perft node count.
/// Counts the leaf positions of the alternating-turn game tree rooted at
/// `board` with `to_move` to play, down to `depth`. A side with no moves
/// ends its subtree early and contributes nothing below that point.
pub fn perft(board: &Board, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for successor in all_successors(board, to_move) {
        nodes += perft(&successor, to_move.other(), depth - 1);
    }
    nodes
}
