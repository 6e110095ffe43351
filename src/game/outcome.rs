//! Terminal verdicts.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Why the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Challenged human answered with nothing.
    HumanBluffed,
    /// Challenged human answered with something. The answer is not checked.
    HumanDefended,
    /// Challenged computer found a word extending the prefix.
    ComputerRevealedWord(String),
    /// Challenged computer found no word extending the prefix.
    ComputerCouldNotDefend,
    /// The human's letter completed a dictionary word.
    HumanCompletedWord(String),
}

impl Reason {
    /// Player who lost for this reason.
    #[must_use]
    pub fn loser(&self) -> Player {
        match self {
            Reason::HumanDefended | Reason::ComputerCouldNotDefend => Player::Computer,
            Reason::HumanBluffed
            | Reason::ComputerRevealedWord(_)
            | Reason::HumanCompletedWord(_) => Player::Human,
        }
    }
}

/// Final verdict of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Player,
    pub reason: Reason,
}

impl Outcome {
    #[must_use]
    pub fn new(reason: Reason) -> Self {
        Self {
            winner: reason.loser().opponent(),
            reason,
        }
    }

    #[must_use]
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }

    /// Word shown to justify the verdict, if any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match &self.reason {
            Reason::ComputerRevealedWord(word) | Reason::HumanCompletedWord(word) => Some(word),
            _ => None,
        }
    }
}
