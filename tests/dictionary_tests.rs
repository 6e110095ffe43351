//! Dictionary index properties.
//!
//! Fixed examples pin the documented answers; proptest checks the prefix
//! invariants over arbitrary lowercase word sets.

use std::collections::BTreeSet;

use ghost::dictionary::{words_from_lines, Dictionary};
use proptest::prelude::*;

fn word_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..40)
}

/// Test the worked example: {cat, car, dog}.
#[test]
fn test_cat_car_dog() {
    let dict = Dictionary::from_words(["cat", "car", "dog"]);

    assert_eq!(dict.all_words_with_prefix("ca"), vec!["car", "cat"]);
    assert_eq!(dict.first_word_with_prefix("c").as_deref(), Some("car"));
    assert_eq!(dict.first_word_with_prefix("do").as_deref(), Some("dog"));
    assert_eq!(dict.first_word_with_prefix("z"), None);
}

/// Test that duplicates collapse.
#[test]
fn test_duplicate_insertions() {
    let dict = Dictionary::from_words(["ghost", "ghoul", "ghost", "ghoul", "ghost"]);

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.all_words_with_prefix(""), vec!["ghost", "ghoul"]);
}

/// Test that the loader's output is accepted verbatim by the dictionary.
#[test]
fn test_loader_feeds_dictionary() {
    let lines = ["Zebra", " apple ", "a", "O'Neil", "apples", ""];
    let words = words_from_lines(lines, 2);
    let dict = Dictionary::from_words(&words);

    assert_eq!(dict.len(), words.len());
    assert_eq!(dict.all_words_with_prefix("app"), vec!["apple", "apples"]);
    assert_eq!(dict.first_word_with_prefix("z").as_deref(), Some("zebra"));
}

/// Test that a word that is a prefix of a longer word is still found first.
#[test]
fn test_nested_words() {
    let dict = Dictionary::from_words(["ghostly", "ghost", "gho"]);

    assert_eq!(dict.first_word_with_prefix("g").as_deref(), Some("gho"));
    assert_eq!(dict.first_word_with_prefix("ghos").as_deref(), Some("ghost"));
    assert_eq!(
        dict.all_words_with_prefix("gh"),
        vec!["gho", "ghost", "ghostly"]
    );
}

proptest! {
    /// Every prefix of every inserted word is present.
    #[test]
    fn prop_prefixes_of_inserted_words_exist(words in word_set()) {
        let dict = Dictionary::from_words(&words);

        for word in &words {
            for end in 0..=word.len() {
                prop_assert!(dict.contains_prefix(&word[..end]).is_some());
            }
            prop_assert!(dict.is_word(word));
            let first = dict.first_word_with_prefix(word);
            prop_assert_eq!(first.as_deref(), Some(word.as_str()));
        }
    }

    /// The full listing is the deduplicated, sorted input.
    #[test]
    fn prop_all_words_is_sorted_word_set(words in word_set()) {
        let dict = Dictionary::from_words(&words);
        let expected: Vec<String> = words
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(dict.len(), expected.len());
        prop_assert_eq!(dict.all_words_with_prefix(""), expected);
    }

    /// A prefix has a first word exactly when some word starts with it, and
    /// it is the lexicographically smallest of them.
    #[test]
    fn prop_first_word_iff_prefix_used(words in word_set(), prefix in "[a-z]{0,3}") {
        let dict = Dictionary::from_words(&words);
        let matching: Vec<&String> = words.iter().filter(|w| w.starts_with(&prefix)).collect();

        match dict.first_word_with_prefix(&prefix) {
            None => prop_assert!(matching.is_empty()),
            Some(first) => {
                prop_assert!(first.starts_with(&prefix));
                prop_assert!(matching.contains(&&first));
                let listed = dict.all_words_with_prefix(&prefix);
                prop_assert_eq!(listed.first(), Some(&first));
            }
        }
    }

    /// Listings under a prefix are exactly the words starting with it.
    #[test]
    fn prop_all_words_with_prefix_matches_filter(words in word_set(), prefix in "[a-z]{0,2}") {
        let dict = Dictionary::from_words(&words);
        let expected: Vec<String> = words
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(dict.all_words_with_prefix(&prefix), expected);
    }
}
