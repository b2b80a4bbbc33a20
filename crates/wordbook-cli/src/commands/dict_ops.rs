use std::fs;
use std::path::Path;
use std::process;

use crate::dict_source::{self, SOURCE_NAMES};
use wordbook_core::dict::{DictStore, Dictionary};
use wordbook_core::suggest::LookupEngine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

const SAMPLE_WORDS: &[&str] = &["a", "the", "dictionary", "word"];

pub fn convert(source_name: &str, input_file: &str, output_file: &str) {
    let dict_source = dict_source::from_name(source_name).unwrap_or_else(|| {
        eprintln!(
            "Error: unknown source '{source_name}' (available: {})",
            SOURCE_NAMES.join(", ")
        );
        process::exit(1);
    });

    eprintln!("Source: {source_name}");
    let words = die!(
        dict_source.parse_file(Path::new(input_file)),
        "Error parsing dictionary: {}"
    );

    let store = DictStore::from(words);
    let (word_count, meaning_count) = store.stats();
    eprintln!("Writing snapshot of {word_count} words ({meaning_count} meanings)...");

    die!(
        store.save(Path::new(output_file)),
        "Error writing snapshot: {}"
    );

    let file_size = fs::metadata(output_file).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output_file} (compressed size: {:.2} MB)",
        file_size as f64 / 1_048_576.0
    );
}

fn open_store(dict_file: &str) -> DictStore {
    die!(
        DictStore::open(Path::new(dict_file)),
        "Error opening dictionary: {}"
    )
}

pub fn info(dict_file: &str) {
    let store = open_store(dict_file);

    let file_size = fs::metadata(dict_file).map(|m| m.len()).unwrap_or(0);
    let (word_count, meaning_count) = store.stats();

    println!("Dictionary: {dict_file}");
    println!("File size:  {:.2} MB", file_size as f64 / 1_048_576.0);
    println!("Words:      {word_count}");
    println!("Meanings:   {meaning_count}");

    println!();
    println!("Sample lookups:");
    for word in SAMPLE_WORDS {
        match store.lookup(word) {
            Some(meanings) => {
                let shown: Vec<&str> = meanings.iter().take(3).map(String::as_str).collect();
                println!("  {word} → {}", shown.join("; "));
            }
            None => println!("  {word} → (not found)"),
        }
    }
}

pub fn lookup(dict_file: &str, word: &str) {
    let store = open_store(dict_file);
    match store.lookup(word) {
        Some(meanings) => {
            println!("{word}: {} meanings", meanings.len());
            for (i, m) in meanings.iter().enumerate() {
                println!("  {}. {m}", i + 1);
            }
        }
        None => {
            println!("{word}: not found");
            process::exit(1);
        }
    }
}

pub fn suggest(dict_file: &str, prefix: &str, limit: i64) {
    let engine = LookupEngine::new(open_store(dict_file));
    let words = engine.suggest(prefix, limit);
    if words.is_empty() {
        println!("{prefix}: no suggestions");
        return;
    }
    for w in &words {
        println!("{w}");
    }
    eprintln!("{} suggestions", words.len());
}
