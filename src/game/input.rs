//! Human input validation.
//!
//! An unchallenged human may type one letter or the keyword `challenge`.
//! The shape is checked on the trimmed line before it is lowercased, so
//! `A` is a valid letter but `Challenge` is rejected.

use thiserror::Error;

/// Keyword a human types to challenge the computer.
pub const CHALLENGE: &str = "challenge";

/// Why a move was refused. Refused moves never consume a turn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("no move entered")]
    Empty,

    #[error("'{0}' contains characters other than letters")]
    NotLetters(String),

    #[error("'{0}' is neither a single letter nor 'challenge'")]
    NotSingleLetter(String),

    #[error("a challenge can not be made at the start of the game")]
    ChallengeAtStart,

    #[error("it is not the {0}'s turn")]
    OutOfTurn(crate::core::Player),

    #[error("the game is already over")]
    GameOver,
}

impl MoveError {
    /// Whether this rejection came from the shape of the typed line.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            MoveError::Empty | MoveError::NotLetters(_) | MoveError::NotSingleLetter(_)
        )
    }
}

/// A well-formed move from an unchallenged human.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanMove {
    Letter(char),
    Challenge,
}

/// Check the shape of an unchallenged human's line.
pub fn validate(raw: &str) -> Result<(), MoveError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(MoveError::Empty);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MoveError::NotLetters(trimmed.to_string()));
    }
    if trimmed.len() != 1 && trimmed != CHALLENGE {
        return Err(MoveError::NotSingleLetter(trimmed.to_string()));
    }

    Ok(())
}

/// Trim and lowercase.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate and classify an unchallenged human's line.
///
/// ```
/// use ghost::game::input::{parse_move, HumanMove};
///
/// assert_eq!(parse_move(" G "), Ok(HumanMove::Letter('g')));
/// assert_eq!(parse_move("challenge"), Ok(HumanMove::Challenge));
/// assert!(parse_move("gh").is_err());
/// ```
pub fn parse_move(raw: &str) -> Result<HumanMove, MoveError> {
    validate(raw)?;

    let clean = sanitize(raw);
    if clean == CHALLENGE {
        return Ok(HumanMove::Challenge);
    }

    match clean.chars().next() {
        Some(letter) => Ok(HumanMove::Letter(letter)),
        None => Err(MoveError::Empty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters_accepted() {
        assert_eq!(parse_move("a"), Ok(HumanMove::Letter('a')));
        assert_eq!(parse_move("Z"), Ok(HumanMove::Letter('z')));
        assert_eq!(parse_move("\tq\n"), Ok(HumanMove::Letter('q')));
    }

    #[test]
    fn test_challenge_keyword() {
        assert_eq!(parse_move("challenge"), Ok(HumanMove::Challenge));
        assert_eq!(parse_move("  challenge  "), Ok(HumanMove::Challenge));
    }

    #[test]
    fn test_challenge_keyword_is_case_sensitive() {
        assert_eq!(
            parse_move("Challenge"),
            Err(MoveError::NotSingleLetter("Challenge".into()))
        );
        assert!(parse_move("CHALLENGE").is_err());
    }

    #[test]
    fn test_rejections() {
        assert_eq!(parse_move(""), Err(MoveError::Empty));
        assert_eq!(parse_move("   "), Err(MoveError::Empty));
        assert_eq!(parse_move("1"), Err(MoveError::NotLetters("1".into())));
        assert_eq!(parse_move("a b"), Err(MoveError::NotLetters("a b".into())));
        assert_eq!(parse_move("é"), Err(MoveError::NotLetters("é".into())));
        assert_eq!(parse_move("ab"), Err(MoveError::NotSingleLetter("ab".into())));
    }

    #[test]
    fn test_malformed_classification() {
        assert!(MoveError::Empty.is_malformed_input());
        assert!(MoveError::NotSingleLetter("ab".into()).is_malformed_input());
        assert!(!MoveError::ChallengeAtStart.is_malformed_input());
        assert!(!MoveError::GameOver.is_malformed_input());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("  WoRd \n"), "word");
        assert_eq!(sanitize("   "), "");
    }
}
