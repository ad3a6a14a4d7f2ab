//! English wordlist binding
//!
//! The mnemonic uses the BIP-39 English list: 2048 words, one per
//! 11-bit field element. Lookups are case-sensitive over the canonical
//! list. The reverse index is built once on first use; nothing here
//! assumes the backing list is sorted.

use std::collections::HashMap;
use std::sync::OnceLock;

use bip39::Language;

/// Number of words (one per GF(2^11) element)
pub const WORDLIST_SIZE: usize = 2048;

static INDEX: OnceLock<HashMap<&'static str, u16>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, u16> {
    INDEX.get_or_init(|| {
        Language::English
            .word_list()
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i as u16))
            .collect()
    })
}

/// Look up the 11-bit index of a word, or `None` when the word is not
/// in the list.
pub fn index_of(word: &str) -> Option<u16> {
    index().get(word).copied()
}

/// The word at `index`.
///
/// # Panics
///
/// Panics if `index` is not below 2048.
pub fn word_of(index: u16) -> &'static str {
    Language::English.word_list()[usize::from(index)]
}
