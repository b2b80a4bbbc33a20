//! WBKS snapshot format.
//!
//! ```text
//! +-------+---------+------------------------------------------+
//! | magic | version | gzip( bincode( Vec<WordEntry> ) )        |
//! | 4 B   | 1 B     | records sorted by word                   |
//! +-------+---------+------------------------------------------+
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use memmap2::Mmap;
use tracing::debug;

use super::{DictError, DictStore, WordEntry};

pub(super) const MAGIC: &[u8; 4] = b"WBKS";
pub(super) const VERSION: u8 = 1;
pub(super) const HEADER_SIZE: usize = 4 + 1;

impl DictStore {
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let records = self.sorted_records();

        let mut buf = Vec::with_capacity(HEADER_SIZE);
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);

        let mut encoder = GzEncoder::new(buf, Compression::default());
        bincode::serialize_into(&mut encoder, &records).map_err(DictError::Serialize)?;
        Ok(encoder.finish()?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }

        let decoder = GzDecoder::new(&data[HEADER_SIZE..]);
        let records: Vec<WordEntry> =
            bincode::deserialize_from(decoder).map_err(DictError::Deserialize)?;
        debug!(records = records.len(), "decoded snapshot");

        Ok(records.into_iter().collect())
    }

    /// Open a snapshot file, using mmap to avoid a separate heap copy of the
    /// compressed bytes.
    pub fn open(path: &Path) -> Result<Self, DictError> {
        let file = File::open(path)?;
        // SAFETY: The file is opened read-only and the mapping is immutable.
        // The Mmap is dropped after decoding completes below.
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap)
    }

    /// Atomic write: write to `<path>.tmp` then rename. The temp file is
    /// removed if either step fails.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = tmp_path(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if let Err(e) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// `dict.wbk` -> `dict.wbk.tmp`
pub(super) fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
