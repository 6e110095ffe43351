//! The Ghost game: state, turn engine and the console boundary.
//!
//! - `state`: turn owner, shared prefix, challenge flags
//! - `input`: validation of what the human types
//! - `outcome`: who won and why
//! - `console`: line I/O the engine talks through
//! - `engine`: `Game`, the turn state machine

pub mod console;
pub mod engine;
pub mod input;
pub mod outcome;
pub mod state;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use engine::{Game, Move, Turn};
pub use input::{HumanMove, MoveError, CHALLENGE};
pub use outcome::{Outcome, Reason};
pub use state::{GameState, Phase};
