//! Dictionary index and word-list loading.
//!
//! - `trie`: prefix tree answering "is this a word", "first word with this
//!   prefix" and "all words with this prefix"
//! - `loader`: turns a raw word-list file into the words the trie accepts

pub mod loader;
pub mod trie;

pub use loader::{load_words, words_from_lines};
pub use trie::{Dictionary, TrieNode};
