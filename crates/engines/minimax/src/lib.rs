//! Minimax Draughts Engine
//!
//! Exhaustive depth-limited minimax over the board's static evaluation.
//! This is the computer opponent: no pruning, no move ordering, no
//! caching. The whole tree down to the configured depth, every time.

mod search;

use draughts_core::{Board, Color, Engine, SearchResult};

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// Draughts engine using exhaustive fixed-depth minimax.
///
/// The engine never mutates the board it is given; it returns the chosen
/// successor for the caller to install as the new game state.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult {
        self.nodes = 0;

        let maximizing = to_move == Color::White;
        let (score, best) = search::minimax(board, depth, maximizing, &mut self.nodes);

        SearchResult {
            best,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::minimax;
