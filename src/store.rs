//! In-memory name store with lock-free reads.
//!
//! The store follows a copy-on-write scheme: reads happen on every request
//! and must not contend, writes happen once at initialization. ArcSwap gives
//! us lock-free snapshot reads; a write clones the inner map, applies the
//! change and atomically swaps the pointer.
//!
//! Layout mirrors the original key-value store: two top-level keys
//! ([`JAPANESE_KEY`], [`KOREAN_KEY`]) each holding the full record array.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Store key for the Japanese name table.
pub const JAPANESE_KEY: &str = "japanese_names";

/// Store key for the Korean name table.
pub const KOREAN_KEY: &str = "korean_names";

/// Gender marker carried by every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

/// A single name record.
///
/// Records are immutable once loaded; similarity and recommendation results
/// pair a clone of the record with derived fields instead of annotating the
/// stored value in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Script-specific display form: kanji for Japanese, hangul for Korean.
    pub display: String,

    /// Phonetic reading (hiragana). Absent for Korean records, where hangul
    /// is already phonetic; [`NameRecord::phonetic`] falls back to `display`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,

    pub gender: Gender,

    /// Year -> top-10 rank (1 is best). Invariant: values in 1..=10.
    pub yearly_ranks: BTreeMap<i32, u8>,

    /// Short descriptive tags used for similarity scoring.
    #[serde(default)]
    pub characteristics: Vec<String>,

    /// Data source label.
    #[serde(default)]
    pub source: String,
}

impl NameRecord {
    /// The phonetic form used for prefix matching: the explicit reading when
    /// present, otherwise the display form itself.
    #[inline]
    pub fn phonetic(&self) -> &str {
        self.reading.as_deref().unwrap_or(&self.display)
    }
}

/// Internal state of the store. Immutable once created; updates clone it
/// and swap the pointer.
#[derive(Debug, Default, Clone)]
struct StoreInner {
    entries: HashMap<Arc<str>, Arc<Vec<NameRecord>>>,
    version: u64,
}

/// Lock-free name store.
///
/// # Thread Safety
///
/// - Reads: lock-free, wait-free (atomic load of the current snapshot)
/// - Writes: copy-on-write swap; rare (initialization only in practice)
pub struct NameStore {
    inner: ArcSwap<StoreInner>,
}

impl NameStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: ArcSwap::from_pointee(StoreInner::default()),
        }
    }

    /// Get the record array stored under a key.
    ///
    /// Hot path: O(1) hash lookup, zero allocation, no locking.
    #[inline]
    pub fn get(&self, key: &str) -> Option<Arc<Vec<NameRecord>>> {
        let guard = self.inner.load();
        guard.entries.get(key).map(Arc::clone)
    }

    /// Store a record array under a key, replacing any previous value.
    pub fn set(&self, key: &str, records: Vec<NameRecord>) {
        let mut new_inner = (*self.inner.load_full()).clone();
        new_inner.entries.insert(Arc::from(key), Arc::new(records));
        new_inner.version += 1;
        self.inner.store(Arc::new(new_inner));
    }

    /// Remove a key from the store, returning the previous value.
    pub fn remove(&self, key: &str) -> Option<Arc<Vec<NameRecord>>> {
        let old = self.get(key);
        if old.is_some() {
            let mut new_inner = (*self.inner.load_full()).clone();
            new_inner.entries.remove(key);
            new_inner.version += 1;
            self.inner.store(Arc::new(new_inner));
        }
        old
    }

    /// Number of top-level keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.load().entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.load().entries.is_empty()
    }

    /// Monotonic version counter, bumped on every write.
    #[inline]
    pub fn version(&self) -> u64 {
        self.inner.load().version
    }

    /// Set/get/remove round-trip on a probe key. Backs the `storeOk` field
    /// of the health endpoint.
    pub fn self_test(&self) -> bool {
        const PROBE: &str = "health_check_probe";
        self.set(PROBE, Vec::new());
        let ok = self.get(PROBE).is_some();
        self.remove(PROBE);
        ok
    }
}

impl Default for NameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn make_record(display: &str, gender: Gender, ranks: &[(i32, u8)]) -> NameRecord {
        NameRecord {
            display: display.to_string(),
            reading: None,
            gender,
            yearly_ranks: ranks.iter().copied().collect(),
            characteristics: Vec::new(),
            source: String::new(),
        }
    }

    #[test]
    fn test_empty_store() {
        let store = NameStore::new();
        assert!(store.is_empty());
        assert_eq!(store.version(), 0);
        assert!(store.get(JAPANESE_KEY).is_none());
    }

    #[test]
    fn test_set_and_get() {
        let store = NameStore::new();
        store.set(JAPANESE_KEY, vec![make_record("陽翔", Gender::M, &[(2007, 1)])]);

        let names = store.get(JAPANESE_KEY).expect("key should exist");
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].display, "陽翔");
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let store = NameStore::new();
        store.set(KOREAN_KEY, vec![make_record("서준", Gender::M, &[(2006, 1)])]);
        store.set(KOREAN_KEY, Vec::new());

        assert!(store.get(KOREAN_KEY).unwrap().is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_self_test_leaves_no_probe_key() {
        let store = NameStore::new();
        assert!(store.self_test());
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_readers() {
        use std::thread;

        let store = Arc::new(NameStore::new());
        store.set(JAPANESE_KEY, vec![make_record("蓮", Gender::M, &[(1996, 1)])]);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let names = store.get(JAPANESE_KEY).unwrap();
                        assert_eq!(names[0].display, "蓮");
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_record_wire_format_is_camel_case() {
        let record = NameRecord {
            display: "陽翔".to_string(),
            reading: Some("はると".to_string()),
            gender: Gender::M,
            yearly_ranks: [(2007, 1)].into_iter().collect(),
            characteristics: vec!["밝음".to_string()],
            source: "MeijiYasuda".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["yearlyRanks"]["2007"], 1);
        assert_eq!(json["gender"], "M");

        let back: NameRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_phonetic_falls_back_to_display() {
        let record = make_record("서연", Gender::F, &[]);
        assert_eq!(record.phonetic(), "서연");
    }
}
