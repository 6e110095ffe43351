//! Error types for the ghost crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::game::MoveError;

/// Errors that stop a game from starting or from finishing.
///
/// Rejected human input is recovered from inside the game loop and only
/// surfaces here when a turn step is driven out of order.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GhostError {
    #[error("failed to read word list '{}': {source}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list '{}' has no words of at least {min_length} letters", path.display())]
    EmptyDictionary { path: PathBuf, min_length: usize },

    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, GhostError>;
