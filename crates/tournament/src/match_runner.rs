//! Match runner for playing games between engines

use draughts_core::{Board, Color, Engine, all_successors};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Random plies played before the engines take over. Deterministic
    /// engines replay the same game forever without this.
    pub random_opening_plies: u32,
    /// Maximum plies per game before declaring a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            random_opening_plies: 2,
            max_plies: 150,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Parse a config from TOML text; absent keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load a config from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        Self::from_toml(&contents)
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip result since engine1 is black
                match self.play_game(engine2, engine1) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            match game_result {
                GameResult::Win => result.wins += 1,
                GameResult::Loss => result.losses += 1,
                GameResult::Draw => result.draws += 1,
            }

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns result from White's perspective.
    /// Black moves first, as draughts has it.
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameResult {
        let mut board = Board::new();
        let mut to_move = Color::Black;
        white.new_game();
        black.new_game();
        let mut rng = thread_rng();

        for ply in 0..self.config.max_plies {
            let next = if ply < self.config.random_opening_plies {
                all_successors(&board, to_move).choose(&mut rng).cloned()
            } else {
                let result = match to_move {
                    Color::White => white.search(&board, to_move, self.config.depth),
                    Color::Black => black.search(&board, to_move, self.config.depth),
                };
                result.best
            };

            match next {
                Some(successor) => board = successor,
                // No legal move: the side to move has lost
                None => return loss_for(to_move),
            }

            if let Some(winner) = board.winner() {
                return match winner {
                    Color::White => GameResult::Win,
                    Color::Black => GameResult::Loss,
                };
            }

            to_move = to_move.other();
        }

        // Ply cap reached
        GameResult::Draw
    }
}

/// The game result, from White's perspective, when `stuck` cannot move.
fn loss_for(stuck: Color) -> GameResult {
    match stuck {
        Color::White => GameResult::Loss,
        Color::Black => GameResult::Win,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_engine::MinimaxEngine;
    use random_engine::RandomEngine;

    #[test]
    fn test_minimax_self_play() {
        let mut engine1 = MinimaxEngine::new();
        let mut engine2 = MinimaxEngine::new();

        let config = MatchConfig {
            num_games: 2,
            depth: 2,
            max_plies: 60,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        // Self-play should complete without panic
        assert_eq!(result.total_games(), 2);
    }

    #[test]
    fn test_random_baseline_match() {
        let mut engine1 = RandomEngine::new();
        let mut engine2 = RandomEngine::new();

        let config = MatchConfig {
            num_games: 4,
            depth: 1,
            max_plies: 100,
            verbose: false,
            ..Default::default()
        };

        let runner = MatchRunner::new(config);
        let result = runner.run_match(&mut engine1, &mut engine2);

        assert_eq!(
            result.wins + result.losses + result.draws,
            4,
            "every game must produce a result"
        );
    }

    #[test]
    fn test_config_from_toml_keeps_defaults() {
        let config = MatchConfig::from_toml("num_games = 4\ndepth = 5\n").unwrap();

        assert_eq!(config.num_games, 4);
        assert_eq!(config.depth, 5);
        assert_eq!(config.max_plies, MatchConfig::default().max_plies);
        assert_eq!(config.alternate_colors, true);
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        assert!(MatchConfig::from_toml("num_games = \"many\"").is_err());
    }
}
