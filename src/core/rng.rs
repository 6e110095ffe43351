//! Injectable randomness for the coin toss and the computer's choices.
//!
//! The game needs exactly three independent uniform draws:
//!
//! - **Coin toss**: who moves first
//! - **Letter**: which letter the computer appends
//! - **Move type**: whether the computer challenges or plays a letter
//!
//! [`DrawSource`] abstracts them so the engine never touches a hidden global
//! RNG. [`GameRng`] is the production source (seeded or from entropy);
//! [`ScriptedDraws`] replays a fixed sequence for tests.
//!
//! ```
//! use ghost::core::{DrawSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! // Same seed, same game
//! assert_eq!(a.first_mover(), b.first_mover());
//! assert_eq!(a.letter(), b.letter());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::{ComputerMove, Player, ALPHABET};

/// Source of the game's random draws.
pub trait DrawSource {
    /// Coin toss: the player who opens the game.
    fn first_mover(&mut self) -> Player;

    /// A letter from `a`-`z`.
    fn letter(&mut self) -> char;

    /// The computer's move type on a normal turn.
    fn computer_move(&mut self) -> ComputerMove;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn first_mover(&mut self) -> Player {
        (**self).first_mover()
    }

    fn letter(&mut self) -> char {
        (**self).letter()
    }

    fn computer_move(&mut self) -> ComputerMove {
        (**self).computer_move()
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl DrawSource for GameRng {
    fn first_mover(&mut self) -> Player {
        Player::ALL[self.gen_range_usize(0..Player::ALL.len())]
    }

    fn letter(&mut self) -> char {
        ALPHABET[self.gen_range_usize(0..ALPHABET.len())]
    }

    fn computer_move(&mut self) -> ComputerMove {
        ComputerMove::ALL[self.gen_range_usize(0..ComputerMove::ALL.len())]
    }
}

/// Replays pre-recorded draws in order.
///
/// Each kind of draw has its own queue. When a queue runs dry the
/// fallback RNG takes over, so a script only needs to pin the draws a test
/// cares about.
#[derive(Clone, Debug)]
pub struct ScriptedDraws {
    first_movers: VecDeque<Player>,
    letters: VecDeque<char>,
    moves: VecDeque<ComputerMove>,
    fallback: GameRng,
}

impl ScriptedDraws {
    /// Empty script that falls back to `GameRng::new(seed)`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            first_movers: VecDeque::new(),
            letters: VecDeque::new(),
            moves: VecDeque::new(),
            fallback: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn with_first_mover(mut self, player: Player) -> Self {
        self.first_movers.push_back(player);
        self
    }

    /// Queue letters, one draw per `char`.
    #[must_use]
    pub fn with_letters(mut self, letters: &str) -> Self {
        self.letters.extend(letters.chars());
        self
    }

    #[must_use]
    pub fn with_moves(mut self, moves: impl IntoIterator<Item = ComputerMove>) -> Self {
        self.moves.extend(moves);
        self
    }
}

impl DrawSource for ScriptedDraws {
    fn first_mover(&mut self) -> Player {
        match self.first_movers.pop_front() {
            Some(player) => player,
            None => self.fallback.first_mover(),
        }
    }

    fn letter(&mut self) -> char {
        match self.letters.pop_front() {
            Some(letter) => letter,
            None => self.fallback.letter(),
        }
    }

    fn computer_move(&mut self) -> ComputerMove {
        match self.moves.pop_front() {
            Some(mv) => mv,
            None => self.fallback.computer_move(),
        }
    }
}
