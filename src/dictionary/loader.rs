//! Word-list loading.
//!
//! Reads one word per line, normalizes it (trim, lowercase) and keeps it only
//! if it is long enough and spelled with `a`-`z` alone. The dictionary
//! assumes its input already passed these checks.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::error::{GhostError, Result};

/// Normalize raw lines into dictionary words.
///
/// ```
/// use ghost::dictionary::words_from_lines;
///
/// let words = words_from_lines(["  Apple", "a", "it's", "Ox"], 2);
/// assert_eq!(words, vec!["apple", "ox"]);
/// ```
pub fn words_from_lines<I, S>(lines: I, min_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = 0usize;
    let words: Vec<String> = lines
        .into_iter()
        .filter_map(|line| {
            let word = line.as_ref().trim().to_lowercase();
            let keep = !word.is_empty()
                && word.len() >= min_length
                && word.chars().all(|c| c.is_ascii_lowercase());
            if keep {
                Some(word)
            } else {
                skipped += 1;
                None
            }
        })
        .collect();

    debug!(kept = words.len(), skipped, min_length, "word list normalized");
    words
}

/// Read and normalize the word list at `path`.
///
/// Fails if the file cannot be read or if no line survives normalization.
#[instrument(skip_all)]
pub fn load_words(path: impl AsRef<Path>, min_length: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| GhostError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(contents.lines(), min_length);
    if words.is_empty() {
        return Err(GhostError::EmptyDictionary {
            path: path.to_path_buf(),
            min_length,
        });
    }

    info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_trims_and_lowercases() {
        let words = words_from_lines(["  Ghost\t", "WORD", "mixedCase"], 2);
        assert_eq!(words, vec!["ghost", "word", "mixedcase"]);
    }

    #[test]
    fn test_min_length_filter() {
        let words = words_from_lines(["a", "ab", "abc", ""], 3);
        assert_eq!(words, vec!["abc"]);
    }

    #[test]
    fn test_skips_non_letters() {
        let words = words_from_lines(["don't", "x-ray", "r2d2", "naïve", "plain"], 2);
        assert_eq!(words, vec!["plain"]);
    }

    #[test]
    fn test_load_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Aardvark").unwrap();
        writeln!(file, "a").unwrap();
        writeln!(file, "zebra").unwrap();

        let words = load_words(file.path(), 2).unwrap();
        assert_eq!(words, vec!["aardvark", "zebra"]);
    }

    #[test]
    fn test_load_words_missing_file() {
        let err = load_words("/definitely/not/a/word/list", 2).unwrap_err();
        assert!(matches!(err, GhostError::WordList { .. }));
    }

    #[test]
    fn test_load_words_nothing_survives() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a").unwrap();
        writeln!(file, "b").unwrap();

        let err = load_words(file.path(), 2).unwrap_err();
        assert!(matches!(err, GhostError::EmptyDictionary { min_length: 2, .. }));
    }
}
