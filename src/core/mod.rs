//! Core game types: players, move types and randomness.
//!
//! Everything here is independent of the dictionary and the engine.

pub mod player;
pub mod rng;

pub use player::{ComputerMove, Player, ALPHABET};
pub use rng::{DrawSource, GameRng, ScriptedDraws};
