//! Mutable game aggregate.
//!
//! Only the engine mutates a `GameState`; everything else sees it through
//! `&GameState` accessors.

use super::outcome::Outcome;
use crate::core::Player;

/// Coarse position in the turn state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `player` must make a normal move.
    AwaitingMove(Player),
    /// The computer challenged; the human must answer.
    HumanChallenged,
    /// The human challenged; the computer must reveal a word.
    ComputerChallengeResolution,
    /// Terminal.
    GameOver(Outcome),
}

/// Turn owner, shared prefix and challenge flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    to_move: Player,
    prefix: String,
    human_challenged: bool,
    computer_challenged: bool,
    start_of_game: bool,
}

impl GameState {
    /// Fresh state with `first_mover` to play and an empty prefix.
    #[must_use]
    pub fn new(first_mover: Player) -> Self {
        Self {
            to_move: first_mover,
            prefix: String::new(),
            human_challenged: false,
            computer_challenged: false,
            start_of_game: true,
        }
    }

    /// Player who must move next.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Letters played so far.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn human_challenged(&self) -> bool {
        self.human_challenged
    }

    #[must_use]
    pub fn computer_challenged(&self) -> bool {
        self.computer_challenged
    }

    /// No move has been accepted yet.
    #[must_use]
    pub fn is_start_of_game(&self) -> bool {
        self.start_of_game
    }

    /// Phase of a game that has not ended.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.to_move {
            Player::Human if self.human_challenged => Phase::HumanChallenged,
            Player::Computer if self.computer_challenged => Phase::ComputerChallengeResolution,
            player => Phase::AwaitingMove(player),
        }
    }

    pub(crate) fn push_letter(&mut self, letter: char) {
        self.prefix.push(letter);
    }

    pub(crate) fn challenge(&mut self, challenger: Player) {
        debug_assert!(!self.human_challenged && !self.computer_challenged);
        match challenger {
            Player::Human => self.computer_challenged = true,
            Player::Computer => self.human_challenged = true,
        }
    }

    /// Hand the turn to the other player.
    pub(crate) fn end_turn(&mut self) {
        self.to_move = self.to_move.opponent();
        self.start_of_game = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Player::Computer);
        assert_eq!(state.to_move(), Player::Computer);
        assert_eq!(state.prefix(), "");
        assert!(state.is_start_of_game());
        assert!(!state.human_challenged());
        assert!(!state.computer_challenged());
        assert_eq!(state.phase(), Phase::AwaitingMove(Player::Computer));
    }

    #[test]
    fn test_end_turn_alternates() {
        let mut state = GameState::new(Player::Human);

        state.end_turn();
        assert_eq!(state.to_move(), Player::Computer);
        assert!(!state.is_start_of_game());

        state.end_turn();
        assert_eq!(state.to_move(), Player::Human);
    }

    #[test]
    fn test_challenge_phases() {
        let mut state = GameState::new(Player::Human);
        state.push_letter('g');
        state.end_turn();

        state.challenge(Player::Computer);
        state.end_turn();
        assert!(state.human_challenged());
        assert_eq!(state.phase(), Phase::HumanChallenged);

        let mut state = GameState::new(Player::Computer);
        state.push_letter('g');
        state.end_turn();
        state.challenge(Player::Human);
        state.end_turn();
        assert!(state.computer_challenged());
        assert_eq!(state.phase(), Phase::ComputerChallengeResolution);
    }

    #[test]
    fn test_prefix_grows() {
        let mut state = GameState::new(Player::Human);
        for letter in "gho".chars() {
            state.push_letter(letter);
        }
        assert_eq!(state.prefix(), "gho");
    }
}
