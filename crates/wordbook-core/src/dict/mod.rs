//! Dictionary storage.
//!
//! `DictStore` holds the immutable word → meanings mapping. It is serialized
//! to and from the WBKS snapshot format (see `snapshot`).

mod entry;
mod snapshot;
mod store;
#[cfg(test)]
mod tests;

pub use entry::WordEntry;
pub use store::DictStore;

use std::io;

/// Error type for snapshot binary I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected WBKS)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),
}

/// Exact-match access to a word → meanings mapping.
pub trait Dictionary: Send + Sync {
    /// Meanings of `word` in source order, or `None` when the word is absent.
    ///
    /// Matching is exact and case-sensitive.
    fn lookup(&self, word: &str) -> Option<&[String]>;

    /// Number of distinct words.
    fn count(&self) -> usize;

    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }
}
