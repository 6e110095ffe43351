//! # ghost
//!
//! The word game Ghost, played by a human against a scripted computer.
//!
//! Players take turns appending a letter to a shared prefix. Completing a
//! word loses; so does being caught bluffing after a challenge.
//!
//! ## Design Principles
//!
//! 1. **Read-only dictionary**: the trie is built once from the word list and
//!    only borrowed immutably while the game runs.
//!
//! 2. **Injectable randomness**: the coin toss, the computer's letters and its
//!    move types all come from a `DrawSource`, seeded or scripted.
//!
//! 3. **Transport-agnostic engine**: the game talks to the human through the
//!    `Console` trait, so tests drive it with scripted lines.
//!
//! ## Modules
//!
//! - `core`: players, computer move types, randomness
//! - `dictionary`: prefix tree and word-list loading
//! - `game`: game state, input validation, turn engine, console
//! - `config`: session configuration
//! - `error`: setup and I/O errors

pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use crate::config::GhostConfig;

pub use crate::core::{ComputerMove, DrawSource, GameRng, Player, ScriptedDraws, ALPHABET};

pub use crate::dictionary::{load_words, words_from_lines, Dictionary, TrieNode};

pub use crate::error::{GhostError, Result};

pub use crate::game::{
    Console, Game, GameState, Move, MoveError, Outcome, Phase, Reason, ScriptedConsole,
    StdConsole, Turn,
};
