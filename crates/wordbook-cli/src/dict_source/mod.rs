mod json;
mod tsv;

use std::collections::HashMap;
use std::io;
use std::path::Path;

pub use json::JsonSource;
pub use tsv::TsvSource;

/// Parsed word → meanings mapping, ready for `DictStore::from`.
pub type WordMap = HashMap<String, Vec<String>>;

/// A pluggable dictionary source that parses a raw dictionary file.
pub trait DictSource {
    /// Parse `path` and return a map of word → meanings.
    fn parse_file(&self, path: &Path) -> Result<WordMap, DictSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub const SOURCE_NAMES: &[&str] = &["json", "tsv"];

pub fn from_name(name: &str) -> Option<Box<dyn DictSource>> {
    match name {
        "json" => Some(Box::new(JsonSource)),
        "tsv" => Some(Box::new(TsvSource)),
        _ => None,
    }
}
