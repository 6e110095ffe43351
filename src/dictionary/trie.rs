//! Prefix tree over lowercase words.
//!
//! Each node owns a fixed array of 26 child slots indexed by `letter - 'a'`,
//! which gives O(1) child lookup and makes ascending-letter iteration the
//! natural traversal order. Both "first word" and "all words" queries rely
//! on that order to be deterministic.
//!
//! ```
//! use ghost::dictionary::Dictionary;
//!
//! let dict: Dictionary = ["cat", "car", "dog"].into_iter().collect();
//!
//! assert_eq!(dict.all_words_with_prefix("ca"), vec!["car", "cat"]);
//! assert_eq!(dict.first_word_with_prefix("c").as_deref(), Some("car"));
//! assert_eq!(dict.first_word_with_prefix("z"), None);
//! ```

use std::collections::BTreeSet;

use tracing::{debug, instrument};

const ALPHABET_SIZE: usize = 26;

/// Slot index for a letter, or `None` outside `a`-`z`.
fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

/// One letter position along some prefix.
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    letter: Option<char>,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    end_of_word: bool,
}

impl TrieNode {
    fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// The letter this node represents. `None` for the root.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether the path from the root to this node spells a word.
    #[must_use]
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// Child for `letter`, if any word continues with it.
    #[must_use]
    pub fn child(&self, letter: char) -> Option<&TrieNode> {
        letter_index(letter).and_then(|i| self.children[i].as_deref())
    }

    /// Present children in ascending letter order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().filter_map(|c| c.as_deref())
    }

    /// Alphabetically first present child.
    #[must_use]
    pub fn first_child(&self) -> Option<&TrieNode> {
        self.children().next()
    }

    fn collect_words(&self, word: &mut String, out: &mut Vec<String>) {
        if self.end_of_word {
            out.push(word.clone());
        }

        for child in self.children() {
            if let Some(letter) = child.letter {
                word.push(letter);
                child.collect_words(word, out);
                word.pop();
            }
        }
    }

    fn collect_letters(&self, out: &mut BTreeSet<char>) {
        for child in self.children() {
            if let Some(letter) = child.letter {
                out.insert(letter);
            }
            child.collect_letters(out);
        }
    }
}

/// Read-mostly dictionary index.
///
/// Built once from the word list; the game only ever borrows it immutably.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from a word list.
    #[instrument(skip_all)]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        let mut rejected = 0usize;

        for word in words {
            let word = word.as_ref();
            if !dict.insert(word) && !dict.is_word(word) {
                rejected += 1;
            }
        }

        debug!(words = dict.word_count, rejected, "dictionary built");
        dict
    }

    /// Insert a word.
    ///
    /// Returns `true` if the word was not already present. Empty words and
    /// words with characters outside `a`-`z` are refused and return `false`.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            debug!(word, "refusing word outside the a-z alphabet");
            return false;
        }

        let mut node = &mut self.root;
        for letter in word.chars() {
            let Some(index) = letter_index(letter) else {
                return false;
            };
            node = node.children[index]
                .get_or_insert_with(|| Box::new(TrieNode::new(letter)))
                .as_mut();
        }

        if node.end_of_word {
            false
        } else {
            node.end_of_word = true;
            self.word_count += 1;
            true
        }
    }

    /// The root node (empty prefix).
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node at the end of `prefix`, or `None` if no word starts with it.
    ///
    /// The empty prefix yields the root.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, letter| node.child(letter))
    }

    /// First word extending `prefix`, descending through the alphabetically
    /// earliest child at each level.
    ///
    /// Returns `prefix` itself when it is already a word.
    #[must_use]
    pub fn first_word_with_prefix(&self, prefix: &str) -> Option<String> {
        let mut node = self.contains_prefix(prefix)?;
        let mut word = prefix.to_string();

        while !node.end_of_word {
            // Only the root of an empty dictionary is a childless non-word
            node = node.first_child()?;
            word.extend(node.letter);
        }

        Some(word)
    }

    /// All words extending `prefix`, in lexicographic order.
    #[must_use]
    pub fn all_words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();

        if let Some(node) = self.contains_prefix(prefix) {
            let mut word = prefix.to_string();
            node.collect_words(&mut word, &mut words);
        }

        words
    }

    /// Whether `word` was inserted.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.contains_prefix(word)
            .is_some_and(TrieNode::is_end_of_word)
    }

    /// Every letter used by some word.
    #[must_use]
    pub fn letters(&self) -> BTreeSet<char> {
        let mut letters = BTreeSet::new();
        self.root.collect_letters(&mut letters);
        letters
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
