//! Turn processing for a human-versus-computer game of Ghost.
//!
//! The engine exposes each turn as a step (`submit_human_input`,
//! `play_computer_turn`) so callers can drive a game move by move, and a
//! `run` loop that drives both sides through a [`Console`].
//!
//! ## Turn rules
//!
//! - The first mover is decided by a coin toss
//! - A human may type one letter or `challenge` (never as the opening move)
//! - A challenged human loses by answering with an empty line; any other
//!   answer wins, and the answer is not looked up
//! - A challenged computer reveals the first dictionary word extending the
//!   prefix, or loses if there is none
//! - On every other turn the computer first checks whether the prefix is
//!   already a word (the human completed it and loses), then either
//!   challenges or appends a random letter, with equal probability

use tracing::{debug, info, instrument};

use super::console::Console;
use super::input::{parse_move, sanitize, HumanMove, MoveError};
use super::outcome::{Outcome, Reason};
use super::state::{GameState, Phase};
use crate::config::GhostConfig;
use crate::core::{ComputerMove, DrawSource, GameRng, Player};
use crate::dictionary::{load_words, Dictionary};
use crate::error::{GhostError, Result};

/// An accepted, non-terminal move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// `player` appended `letter` to the prefix.
    Letter { player: Player, letter: char },
    /// `by` challenged the other player.
    Challenge { by: Player },
}

impl Move {
    #[must_use]
    pub fn player(&self) -> Player {
        match *self {
            Move::Letter { player, .. } => player,
            Move::Challenge { by } => by,
        }
    }
}

/// Result of one turn step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    /// The move was accepted and the turn passed to the other player.
    Played(Move),
    /// The game ended.
    Finished(Outcome),
}

/// A game in progress.
pub struct Game<R = GameRng> {
    dictionary: Dictionary,
    state: GameState,
    draws: R,
    outcome: Option<Outcome>,
}

impl Game<GameRng> {
    /// Load the configured word list and toss for the first move.
    #[instrument(skip_all)]
    pub fn from_config(config: &GhostConfig) -> Result<Self> {
        let words = load_words(&config.dictionary_path, config.min_word_length)?;
        let dictionary = Dictionary::from_words(&words);
        Ok(Self::new(dictionary, config.rng()))
    }
}

impl<R: DrawSource> Game<R> {
    /// Start a game over `dictionary`, tossing a coin for the first move.
    pub fn new(dictionary: Dictionary, mut draws: R) -> Self {
        let first = draws.first_mover();
        info!(first_mover = %first, words = dictionary.len(), "new game");

        Self {
            dictionary,
            state: GameState::new(first),
            draws,
            outcome: None,
        }
    }

    /// Build the dictionary from `words` and start a game over it.
    pub fn from_words<I, S>(words: I, draws: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Dictionary::from_words(words), draws)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The verdict, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.outcome {
            Some(outcome) => Phase::GameOver(outcome.clone()),
            None => self.state.phase(),
        }
    }

    /// Every dictionary word extending `prefix`.
    #[must_use]
    pub fn search_words(&self, prefix: &str) -> Vec<String> {
        self.dictionary.all_words_with_prefix(prefix)
    }

    /// Process one line typed by the human.
    ///
    /// A rejected line leaves the game untouched and the human still to
    /// move.
    pub fn submit_human_input(&mut self, raw: &str) -> std::result::Result<Turn, MoveError> {
        self.ensure_turn(Player::Human)?;

        if self.state.human_challenged() {
            let answer = sanitize(raw);
            let reason = if answer.is_empty() {
                Reason::HumanBluffed
            } else {
                Reason::HumanDefended
            };
            return Ok(self.finish(reason));
        }

        match parse_move(raw)? {
            HumanMove::Challenge if self.state.is_start_of_game() => {
                Err(MoveError::ChallengeAtStart)
            }
            HumanMove::Challenge => {
                self.state.challenge(Player::Human);
                Ok(self.accept(Move::Challenge { by: Player::Human }))
            }
            HumanMove::Letter(letter) => {
                self.state.push_letter(letter);
                Ok(self.accept(Move::Letter {
                    player: Player::Human,
                    letter,
                }))
            }
        }
    }

    /// Let the computer take its turn.
    pub fn play_computer_turn(&mut self) -> std::result::Result<Turn, MoveError> {
        self.ensure_turn(Player::Computer)?;

        if self.state.is_start_of_game() {
            return Ok(self.computer_letter());
        }

        if self.state.computer_challenged() {
            let reason = match self.dictionary.first_word_with_prefix(self.state.prefix()) {
                Some(word) => Reason::ComputerRevealedWord(word),
                None => Reason::ComputerCouldNotDefend,
            };
            return Ok(self.finish(reason));
        }

        let prefix = self.state.prefix();
        if self.dictionary.first_word_with_prefix(prefix).as_deref() == Some(prefix) {
            let word = prefix.to_string();
            return Ok(self.finish(Reason::HumanCompletedWord(word)));
        }

        match self.draws.computer_move() {
            ComputerMove::ChallengeHuman => {
                self.state.challenge(Player::Computer);
                Ok(self.accept(Move::Challenge { by: Player::Computer }))
            }
            ComputerMove::Normal => Ok(self.computer_letter()),
        }
    }

    /// Play both sides until the game ends, talking to the human through
    /// `console`.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<Outcome> {
        if self.state.is_start_of_game() && self.outcome.is_none() {
            console.write_line(&format!("{} moves first.", self.state.to_move()))?;
        }

        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }

            match self.state.to_move() {
                Player::Human => {
                    self.prompt_human(console)?;
                    let Some(line) = console.read_line()? else {
                        return Err(GhostError::InputClosed);
                    };

                    match self.submit_human_input(&line) {
                        Ok(turn) => announce(console, &turn)?,
                        Err(err) if err.is_malformed_input() => {
                            debug!(%err, "rejected human input");
                            console.write_line("Invalid input.")?;
                        }
                        Err(MoveError::ChallengeAtStart) => console
                            .write_line("A challenge can not be made at the start of the game...")?,
                        Err(err) => return Err(err.into()),
                    }
                }
                Player::Computer => {
                    let turn = self.play_computer_turn()?;
                    announce(console, &turn)?;
                }
            }
        }
    }

    fn ensure_turn(&self, player: Player) -> std::result::Result<(), MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.state.to_move() != player {
            return Err(MoveError::OutOfTurn(player));
        }
        Ok(())
    }

    fn computer_letter(&mut self) -> Turn {
        let letter = self.draws.letter();
        self.state.push_letter(letter);
        self.accept(Move::Letter {
            player: Player::Computer,
            letter,
        })
    }

    fn accept(&mut self, mv: Move) -> Turn {
        debug!(?mv, prefix = self.state.prefix(), "move accepted");
        self.state.end_turn();
        Turn::Played(mv)
    }

    fn finish(&mut self, reason: Reason) -> Turn {
        let outcome = Outcome::new(reason);
        info!(
            winner = %outcome.winner,
            reason = ?outcome.reason,
            prefix = self.state.prefix(),
            "game over"
        );
        self.outcome = Some(outcome.clone());
        Turn::Finished(outcome)
    }

    fn prompt_human<C: Console>(&self, console: &mut C) -> std::io::Result<()> {
        if self.state.is_start_of_game() {
            console.write_line("Let's start the game...")?;
        } else {
            console.write_line(&format!("Current word: {}", self.state.prefix()))?;
        }

        if self.state.human_challenged() {
            console.write_line("You have been challenged by computer...")?;
            console.prompt("Please enter your response: ")
        } else {
            console.prompt("Enter a letter or challenge: ")
        }
    }
}

fn announce<C: Console>(console: &mut C, turn: &Turn) -> std::io::Result<()> {
    match turn {
        Turn::Played(Move::Letter {
            player: Player::Computer,
            letter,
        }) => console.write_line(&format!("Computer chose: {letter}")),
        Turn::Played(_) => Ok(()),
        Turn::Finished(outcome) => match &outcome.reason {
            Reason::HumanBluffed => console.write_line("Human lost! You bluffed."),
            Reason::HumanDefended => console.write_line("Computer lost!!!"),
            Reason::ComputerRevealedWord(word) => {
                console.write_line(&format!("Computer found the word: {word}"))?;
                console.write_line("Human lost!!")
            }
            Reason::ComputerCouldNotDefend => {
                console.write_line("Computer couldn't find the word. Human won!!")
            }
            Reason::HumanCompletedWord(word) => {
                console.write_line("Hello human! I caught you completing a word. You lose!")?;
                console.write_line(&format!("Word found: {word}"))
            }
        },
    }
}
