//! The two participants and the computer's move repertoire.
//!
//! ## Player
//!
//! Ghost is always played between exactly one human and the computer, so
//! players are a closed enum rather than numeric ids.
//!
//! ## ComputerMove
//!
//! The computer never searches: each turn it picks one of two move types
//! uniformly at random (see [`DrawSource`](super::DrawSource)).

use serde::{Deserialize, Serialize};

/// Lowercase letters the game is played with, in ascending order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// A participant in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Both players, in coin-toss order.
    pub const ALL: [Player; 2] = [Player::Human, Player::Computer];

    /// The other player.
    ///
    /// ```
    /// use ghost::core::Player;
    ///
    /// assert_eq!(Player::Human.opponent(), Player::Computer);
    /// assert_eq!(Player::Computer.opponent(), Player::Human);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

/// What the computer does on a non-opening, unchallenged turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComputerMove {
    /// Claim the human cannot complete the current prefix.
    ChallengeHuman,
    /// Append a random letter.
    Normal,
}

impl ComputerMove {
    pub const ALL: [ComputerMove; 2] = [ComputerMove::ChallengeHuman, ComputerMove::Normal];
}
