//! Match runner for rust-draughts
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Saving results and generating reports
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax engine and the random baseline
//! cargo run -p tournament -- match minimax random --games 20 --depth 3
//!
//! # Run a gauntlet (one engine vs all the others)
//! cargo run -p tournament -- gauntlet minimax --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
