pub mod board;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all draughts engines (minimax, random, etc.)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The board after the chosen move (None if the mover has no legal move)
    pub best: Option<Board>,
    /// Evaluation score of the chosen line; White maximizes, Black minimizes
    pub score: f32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes visited (optional, for stats)
    pub nodes: u64,
}

/// Trait that all draughts engines must implement.
///
/// This allows swapping between exhaustive search engines, random baselines,
/// and whatever comes next. A search always runs to completion: there is no
/// clock and no way to stop one early.
pub trait Engine: Send {
    /// Search the position and return the board after the best move found.
    ///
    /// # Arguments
    /// * `board` - The position to search; never mutated
    /// * `to_move` - The side the engine is choosing a move for
    /// * `depth` - Search depth in plies
    fn search(&mut self, board: &Board, to_move: Color, depth: u8) -> SearchResult;

    /// Returns the engine's name for reporting
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "rust-draughts"
    }

    /// Reset internal state for a new game (clear counters, etc.)
    fn new_game(&mut self) {}
}
