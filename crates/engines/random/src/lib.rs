//! Random Move Draughts Engine
//!
//! A simple engine that selects uniformly at random among all legal
//! successor boards. Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Exercising the move generator over long random games

use draughts_core::{Board, Color, Engine, SearchResult, all_successors};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A draughts engine that plays random legal moves.
///
/// This engine does no evaluation - it enumerates the legal successor
/// boards and picks one at random. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, to_move: Color, _depth: u8) -> SearchResult {
        let successors = all_successors(board, to_move);
        self.nodes = successors.len() as u64;

        let best = successors.choose(&mut thread_rng()).cloned();

        SearchResult {
            best,
            score: 0.0,
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
