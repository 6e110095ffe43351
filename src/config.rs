//! Session configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Default location of the system word list.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Words shorter than this never enter the dictionary.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostConfig {
    /// Word list, one word per line.
    pub dictionary_path: PathBuf,

    /// Minimum length of a dictionary word (default: 2).
    pub min_word_length: usize,

    /// Random seed. `None` seeds from the operating system, so every game
    /// differs; a fixed seed replays the same computer choices.
    pub seed: Option<u64>,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            seed: None,
        }
    }
}

impl GhostConfig {
    #[must_use]
    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    #[must_use]
    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// RNG for this session.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DrawSource;

    #[test]
    fn test_defaults() {
        let config = GhostConfig::default();
        assert_eq!(config.dictionary_path, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.min_word_length, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = GhostConfig::default()
            .with_dictionary_path("words.txt")
            .with_min_word_length(4)
            .with_seed(9);

        assert_eq!(config.dictionary_path, PathBuf::from("words.txt"));
        assert_eq!(config.min_word_length, 4);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GhostConfig::default().with_seed(5);
        let mut a = config.rng();
        let mut b = config.rng();

        let seq_a: String = (0..16).map(|_| a.letter()).collect();
        let seq_b: String = (0..16).map(|_| b.letter()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_config_serde() {
        let config = GhostConfig::default().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GhostConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
