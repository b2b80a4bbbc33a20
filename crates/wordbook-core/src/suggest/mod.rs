//! Lookup engine: exact lookup plus case-insensitive prefix suggestions.
//!
//! `LookupEngine` owns a `DictStore` and a `SortedIndex` of its words, both
//! built once in `LookupEngine::new` and never mutated. Suggestions are found
//! by binary search on the lower-cased keys followed by a forward scan, so a
//! query costs O(log n + k).

mod index;

use tracing::{debug, debug_span, info};

use crate::dict::{DictStore, Dictionary};
use crate::unicode::normalize_prefix;

use index::SortedIndex;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Bounds applied to the `limit` argument of [`LookupEngine::suggest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestLimits {
    /// Used when the caller asks for zero or fewer results.
    pub default_limit: usize,
    /// Upper bound on every result list.
    pub max_limit: usize,
}

impl SuggestLimits {
    /// Effective result count for a requested `limit`.
    pub fn resolve(&self, limit: i64) -> usize {
        let requested = if limit <= 0 {
            self.default_limit
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        };
        requested.min(self.max_limit)
    }
}

impl Default for SuggestLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
        }
    }
}

pub struct LookupEngine {
    store: DictStore,
    index: SortedIndex,
    limits: SuggestLimits,
}

impl LookupEngine {
    pub fn new(store: DictStore) -> Self {
        Self::with_limits(store, SuggestLimits::default())
    }

    pub fn with_limits(store: DictStore, limits: SuggestLimits) -> Self {
        let _span = debug_span!("build_index").entered();
        let index = SortedIndex::build(store.words());
        info!(words = index.len(), "lookup engine ready");
        Self {
            store,
            index,
            limits,
        }
    }

    pub fn store(&self) -> &DictStore {
        &self.store
    }

    pub fn limits(&self) -> SuggestLimits {
        self.limits
    }

    /// Words starting with `prefix`, compared case-insensitively.
    ///
    /// The prefix is trimmed and lower-cased; an empty prefix yields no
    /// suggestions. `limit <= 0` selects the default limit and every limit is
    /// capped at the maximum. Results keep the original casing and follow
    /// the order of their lower-cased forms.
    pub fn suggest(&self, prefix: &str, limit: i64) -> Vec<&str> {
        let _span = debug_span!("suggest", prefix, limit).entered();
        let Some(folded) = normalize_prefix(prefix) else {
            return Vec::new();
        };
        let limit = self.limits.resolve(limit);

        let hits: Vec<&str> = self.index.prefix_matches(&folded).take(limit).collect();
        debug!(hits = hits.len(), "suggest done");
        hits
    }
}

impl Dictionary for LookupEngine {
    fn lookup(&self, word: &str) -> Option<&[String]> {
        self.store.lookup(word)
    }

    fn count(&self) -> usize {
        self.store.count()
    }
}

impl From<DictStore> for LookupEngine {
    fn from(store: DictStore) -> Self {
        Self::new(store)
    }
}
