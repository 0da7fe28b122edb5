// Result cache keyed by lemma and coarse part of speech

use hashbrown::HashMap;

use emcompound_core::boundary::BoundarySet;

use crate::tags::coarse_pos;

// ---------------------------------------------------------------------------
// CacheEntry
// ---------------------------------------------------------------------------

/// A memoized segmentation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheEntry {
    /// Reduced boundary sets. Empty means the lemma is emitted unchanged.
    pub segmentations: Vec<BoundarySet>,
    /// Some contributing analysis started with a preverb.
    pub preverb: bool,
}

impl CacheEntry {
    pub fn new(segmentations: Vec<BoundarySet>, preverb: bool) -> Self {
        Self {
            segmentations,
            preverb,
        }
    }

    /// The "not a compound" marker.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// A single segmentation with one boundary.
    pub fn single(offset: usize) -> Self {
        Self::new(vec![BoundarySet::from([offset])], false)
    }
}

/// Build the cache key of a token: its lemma followed by the first word-class
/// group of its tag. `ház` tagged `[/N][Ine]` becomes `ház[/N]`.
pub fn cache_key(lemma: &str, xpostag: &str) -> String {
    let pos = coarse_pos(xpostag);
    let mut key = String::with_capacity(lemma.len() + pos.len());
    key.push_str(lemma);
    key.push_str(pos);
    key
}

// ---------------------------------------------------------------------------
// CompoundCache
// ---------------------------------------------------------------------------

/// Unbounded memo of segmentation results.
///
/// Lives as long as its owning processor; there is no eviction. Lookups are
/// counted so the host can report the hit rate at the end of a run.
#[derive(Debug, Default)]
pub struct CompoundCache {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl CompoundCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key, counting the hit or miss.
    pub fn get(&mut self, key: &str) -> Option<&CacheEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits += 1;
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Look up a key without touching the counters.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Store a result, replacing any previous entry for the key.
    pub fn put(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

// ===========================================================================
// Tests
// ===========================================================================
