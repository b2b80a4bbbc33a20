use std::collections::HashMap;

use super::{Dictionary, WordEntry};

/// Immutable word → meanings mapping.
///
/// Built once and never mutated, so shared references can be handed to any
/// number of reader threads without locking.
#[derive(Debug, Default)]
pub struct DictStore {
    words: HashMap<String, Vec<String>>,
}

impl DictStore {
    /// Build a store from `(word, meanings)` pairs.
    ///
    /// If a word appears more than once the last pair wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            words: entries.into_iter().collect(),
        }
    }

    /// Iterate over all `(word, meanings)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.words.iter().map(|(w, m)| (w.as_str(), m.as_slice()))
    }

    /// All words in unspecified order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns (word_count, meaning_count).
    pub fn stats(&self) -> (usize, usize) {
        let meanings = self.words.values().map(Vec::len).sum();
        (self.words.len(), meanings)
    }

    /// Records sorted by word, the order used on disk.
    pub(super) fn sorted_records(&self) -> Vec<WordEntry> {
        let mut records: Vec<WordEntry> = self
            .words
            .iter()
            .map(|(word, meanings)| WordEntry {
                word: word.clone(),
                meanings: meanings.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.word.as_bytes().cmp(b.word.as_bytes()));
        records
    }
}

impl From<HashMap<String, Vec<String>>> for DictStore {
    fn from(words: HashMap<String, Vec<String>>) -> Self {
        Self { words }
    }
}

impl FromIterator<WordEntry> for DictStore {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().map(|e| (e.word, e.meanings)))
    }
}

impl Dictionary for DictStore {
    fn lookup(&self, word: &str) -> Option<&[String]> {
        self.words.get(word).map(Vec::as_slice)
    }

    fn count(&self) -> usize {
        self.words.len()
    }
}
