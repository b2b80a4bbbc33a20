mod snapshot;

use super::DictStore;

fn entry(word: &str, meanings: &[&str]) -> (String, Vec<String>) {
    (
        word.to_string(),
        meanings.iter().map(|m| m.to_string()).collect(),
    )
}

pub(super) fn sample_store() -> DictStore {
    DictStore::from_entries(vec![
        entry("apple", &["a fruit"]),
        entry("app", &["short for application"]),
        entry("Application", &["a program"]),
        entry(
            "bank",
            &["the land alongside a river", "a financial institution"],
        ),
        entry("void", &[]),
    ])
}
