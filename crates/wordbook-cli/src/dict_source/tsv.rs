//! Tab-separated word list, one `word<TAB>meaning` pair per line.
//!
//! A word may repeat; its meanings accumulate in file order. Empty lines and
//! lines starting with `#` are skipped. Lines without a tab, or with an empty
//! word, are malformed; a file that has only malformed entries is an error.

use std::fs;
use std::path::Path;

use super::{DictSource, DictSourceError, WordMap};

pub struct TsvSource;

impl TsvSource {
    pub fn parse_str(&self, content: &str) -> Result<WordMap, DictSourceError> {
        let mut map = WordMap::new();
        let mut total_lines = 0u64;
        let mut skipped = 0u64;
        let mut malformed = 0u64;

        for line in content.lines() {
            total_lines += 1;
            if line.is_empty() || line.starts_with('#') {
                skipped += 1;
                continue;
            }
            let Some((word, meaning)) = line.split_once('\t') else {
                malformed += 1;
                continue;
            };
            let word = word.trim();
            if word.is_empty() {
                malformed += 1;
                continue;
            }
            let meanings = map.entry(word.to_string()).or_default();
            let meaning = meaning.trim();
            if !meaning.is_empty() {
                meanings.push(meaning.to_string());
            }
        }

        eprintln!("  {total_lines} lines, {skipped} skipped, {malformed} malformed");
        if map.is_empty() && malformed > 0 {
            return Err(DictSourceError::Parse("no word entries found".to_string()));
        }
        Ok(map)
    }
}

impl DictSource for TsvSource {
    fn parse_file(&self, path: &Path) -> Result<WordMap, DictSourceError> {
        eprintln!("Reading {}...", path.display());
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }
}
