//! JSON word list:
//!
//! ```json
//! {"TotalUniqueWords": 2,
//!  "Words": [{"EnglishWord": "app", "Meanings": ["short for application"]}, ...]}
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::{DictSource, DictSourceError, WordMap};

pub struct JsonSource;

#[derive(Debug, Deserialize)]
struct JsonDictionary {
    #[serde(rename = "TotalUniqueWords", default)]
    total_unique_words: usize,
    #[serde(rename = "Words")]
    words: Vec<JsonWord>,
}

#[derive(Debug, Deserialize)]
struct JsonWord {
    #[serde(rename = "EnglishWord")]
    word: String,
    #[serde(rename = "Meanings", default)]
    meanings: Option<Vec<String>>,
}

impl JsonSource {
    pub fn parse_reader(&self, reader: impl Read) -> Result<WordMap, DictSourceError> {
        let doc: JsonDictionary = serde_json::from_reader(reader)?;

        let record_count = doc.words.len();
        // TotalUniqueWords is only a hint; never reserve beyond the records read.
        let mut map = WordMap::with_capacity(doc.total_unique_words.min(record_count));
        for w in doc.words {
            map.insert(w.word, w.meanings.unwrap_or_default());
        }

        let duplicates = record_count - map.len();
        if duplicates > 0 {
            eprintln!("  {duplicates} duplicate words (last record kept)");
        }
        if doc.total_unique_words != 0 && doc.total_unique_words != map.len() {
            eprintln!(
                "  Warning: TotalUniqueWords={} but found {} unique words",
                doc.total_unique_words,
                map.len()
            );
        }
        Ok(map)
    }
}

impl DictSource for JsonSource {
    fn parse_file(&self, path: &Path) -> Result<WordMap, DictSourceError> {
        eprintln!("Reading {}...", path.display());
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }
}
