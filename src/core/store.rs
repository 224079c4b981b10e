//! # Baggage Store
//!
//! Immutable, insertion-ordered mapping from key to [`Entry`].
//!
//! Every mutation (`set`, `remove`, `merge`) returns a new store and
//! leaves the receiver untouched, so a single instance can be shared by
//! any number of readers without synchronization. Backing storage is a
//! plain ordered `Vec` of pairs: iteration order is part of the wire
//! contract and the entry cap keeps lookups over a short list cheap.

use crate::core::entry::Entry;
use crate::error::{BaggageError, Result};
use crate::limits::{fits_count, Limits};
use tracing::debug;

/// An immutable collection of baggage entries, bounded by [`Limits`].
///
/// Keys are case-sensitive and unique; inserting an existing key replaces
/// its entry in place (last-write-wins, position retained). The store
/// never exceeds `limits.max_entries` after a public operation: explicit
/// `set` is rejected with [`BaggageError::CapacityExceeded`], while bulk
/// construction and [`merge`](Baggage::merge) saturate silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baggage {
    entries: Vec<(String, Entry)>,
    limits: Limits,
}

impl Default for Baggage {
    fn default() -> Self {
        Self::new()
    }
}

impl Baggage {
    /// Create an empty store with default limits.
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Create an empty store with explicit limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            entries: Vec::new(),
            limits,
        }
    }

    /// Bulk-construct a store from key/entry pairs with default limits.
    ///
    /// Input iteration order becomes insertion order. Once the entry cap
    /// is reached, remaining pairs are dropped silently; this mirrors the
    /// saturating decode path rather than the strict `set` path, because
    /// the caller handed over a whole collection, not one explicit key.
    pub fn from_entries<K, E, I>(pairs: I) -> Self
    where
        K: Into<String>,
        E: Into<Entry>,
        I: IntoIterator<Item = (K, E)>,
    {
        Self::from_entries_with_limits(pairs, Limits::default())
    }

    /// Bulk-construct a store from key/entry pairs with explicit limits.
    pub fn from_entries_with_limits<K, E, I>(pairs: I, limits: Limits) -> Self
    where
        K: Into<String>,
        E: Into<Entry>,
        I: IntoIterator<Item = (K, E)>,
    {
        let mut store = Self::with_limits(limits);
        for (key, entry) in pairs {
            if !store.insert_saturating(key.into(), entry.into()) {
                break;
            }
        }
        store
    }

    /// Look up an entry by key. Returns `None` on miss; a miss is not an error.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Look up just the value by key.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(Entry::value)
    }

    /// Return a new store with `key` mapped to `value` (no metadata).
    ///
    /// # Errors
    /// Returns [`BaggageError::CapacityExceeded`] when `key` is not
    /// already present and the store is at its entry cap. The receiver is
    /// unchanged in that case.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        self.set_with_metadata(key, value, Vec::new())
    }

    /// Return a new store with `key` mapped to `value` and the given
    /// metadata properties.
    ///
    /// # Errors
    /// Returns [`BaggageError::CapacityExceeded`] when a genuinely new key
    /// would exceed the entry cap.
    pub fn set_with_metadata(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        metadata: Vec<String>,
    ) -> Result<Self> {
        let key = key.into();
        let entry = Entry::with_metadata(value.into(), metadata);

        if self.get(&key).is_none() && !fits_count(self.entries.len() + 1, self.limits.max_entries)
        {
            return Err(BaggageError::CapacityExceeded {
                limit: self.limits.max_entries,
            });
        }

        let mut next = self.clone();
        next.replace_or_push(key, entry);
        Ok(next)
    }

    /// Return a new store without `key`. No-op (not an error) if absent.
    pub fn remove(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.entries.retain(|(k, _)| k != key);
        next
    }

    /// Return a new store overlaying `other`'s entries onto this one,
    /// last-write-wins. A bulk operation: saturates silently at the entry
    /// cap instead of erroring, in `other`'s iteration order.
    pub fn merge(&self, other: &Baggage) -> Self {
        let mut next = self.clone();
        for (key, entry) in other.entries() {
            if !next.insert_saturating(key.to_string(), entry.clone()) {
                break;
            }
        }
        next
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries as `(key, entry)` in insertion order. Insertion
    /// order is the only order guaranteed stable across calls on the same
    /// store value.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// The limits this store was constructed with.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Assemble a store from pre-validated parts. Decode uses this after
    /// enforcing the entry cap itself.
    pub(crate) fn from_parts(entries: Vec<(String, Entry)>, limits: Limits) -> Self {
        debug_assert!(entries.len() <= limits.max_entries);
        Self { entries, limits }
    }

    /// Insert with saturating semantics: replacement always succeeds, a
    /// new key is accepted only while under the cap. Returns false once
    /// saturated, signalling bulk callers to stop.
    fn insert_saturating(&mut self, key: String, entry: Entry) -> bool {
        if self.get(&key).is_none() && !fits_count(self.entries.len() + 1, self.limits.max_entries)
        {
            debug!(
                max_entries = self.limits.max_entries,
                dropped_key = %key,
                "baggage entry cap reached, dropping remaining entries"
            );
            return false;
        }
        self.replace_or_push(key, entry);
        true
    }

    fn replace_or_push(&mut self, key: String, entry: Entry) {
        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(at) => self.entries[at].1 = entry,
            None => self.entries.push((key, entry)),
        }
    }
}
