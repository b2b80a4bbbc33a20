use std::fs;
use std::path::Path;

use super::sample_store;
use crate::dict::snapshot::{tmp_path, MAGIC, VERSION};
use crate::dict::{DictError, DictStore, Dictionary};

#[test]
fn test_serialize_roundtrip() {
    let store = sample_store();
    let bytes = store.to_bytes().unwrap();
    assert_eq!(&bytes[..4], MAGIC);
    assert_eq!(bytes[4], VERSION);

    let loaded = DictStore::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.count(), store.count());
    for (word, meanings) in store.iter() {
        assert_eq!(loaded.lookup(word), Some(meanings), "word {word}");
    }
}

#[test]
fn test_serialize_is_deterministic() {
    let a = sample_store().to_bytes().unwrap();
    let b = sample_store().to_bytes().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_store_roundtrip() {
    let bytes = DictStore::default().to_bytes().unwrap();
    let loaded = DictStore::from_bytes(&bytes).unwrap();
    assert_eq!(loaded.count(), 0);
}

#[test]
fn test_invalid_magic() {
    let result = DictStore::from_bytes(b"XXXX\x01data");
    assert!(matches!(result, Err(DictError::InvalidMagic)));
}

#[test]
fn test_too_short() {
    assert!(matches!(
        DictStore::from_bytes(b"WBK"),
        Err(DictError::InvalidHeader)
    ));
    assert!(matches!(
        DictStore::from_bytes(b""),
        Err(DictError::InvalidHeader)
    ));
}

#[test]
fn test_unsupported_version() {
    let mut bytes = sample_store().to_bytes().unwrap();
    bytes[4] = 9;
    assert!(matches!(
        DictStore::from_bytes(&bytes),
        Err(DictError::UnsupportedVersion(9))
    ));
}

#[test]
fn test_corrupt_body() {
    let result = DictStore::from_bytes(b"WBKS\x01not gzip at all");
    assert!(matches!(result, Err(DictError::Deserialize(_))));
}

#[test]
fn test_truncated_body() {
    let bytes = sample_store().to_bytes().unwrap();
    let truncated = &bytes[..bytes.len() / 2];
    assert!(matches!(
        DictStore::from_bytes(truncated),
        Err(DictError::Deserialize(_))
    ));
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("dict.wbk");
    let store = sample_store();
    store.save(&path).unwrap();
    assert!(!dir.path().join("nested").join("dict.wbk.tmp").exists());

    let loaded = DictStore::open(&path).unwrap();
    assert_eq!(loaded.count(), 5);
    assert_eq!(loaded.lookup("bank").unwrap().len(), 2);
}

#[test]
fn test_tmp_path_appends_suffix() {
    assert_eq!(
        tmp_path(Path::new("data/dict.wbk")),
        Path::new("data/dict.wbk.tmp")
    );
    assert_eq!(tmp_path(Path::new("out.tmp")), Path::new("out.tmp.tmp"));
    assert_eq!(tmp_path(Path::new("dict")), Path::new("dict.tmp"));
}

#[test]
fn test_save_target_ending_in_tmp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.tmp");
    sample_store().save(&path).unwrap();
    assert!(!dir.path().join("out.tmp.tmp").exists());
    assert_eq!(DictStore::open(&path).unwrap().count(), 5);
}

#[test]
fn test_save_overwrites_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dict.wbk");
    sample_store().save(&path).unwrap();
    DictStore::default().save(&path).unwrap();
    assert_eq!(DictStore::open(&path).unwrap().count(), 0);
}

#[test]
fn test_failed_save_removes_tmp() {
    let dir = tempfile::tempdir().unwrap();
    // A non-empty directory at the target makes the rename fail.
    let path = dir.path().join("dict.wbk");
    fs::create_dir(&path).unwrap();
    fs::write(path.join("keep"), b"x").unwrap();

    let result = sample_store().save(&path);
    assert!(matches!(result, Err(DictError::Io(_))));
    assert!(!dir.path().join("dict.wbk.tmp").exists());
    assert!(path.join("keep").exists());
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DictStore::open(&dir.path().join("missing.wbk"));
    assert!(matches!(result, Err(DictError::Io(_))));
}
