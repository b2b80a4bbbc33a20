use serde::{Deserialize, Serialize};

/// One word and its meanings, as stored in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub meanings: Vec<String>,
}
