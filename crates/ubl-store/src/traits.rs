use crate::error::StoreResult;

/// One transaction's view of the world state.
///
/// All implementations must satisfy these invariants:
/// - `put` upserts: an unconditional overwrite with no compare-and-swap.
/// - `get` of an unset key returns `Ok(None)`, never an error.
/// - Writes and deletes made through this view are visible to later reads
///   through the same view (read-your-writes).
/// - Nothing written through this view is durably visible unless the
///   enclosing transaction commits.
/// - All backend I/O errors are propagated, never silently ignored.
pub trait WorldState: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is unset.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> StoreResult<()>;

    /// Scan keys in `[start, end)` in lexicographic key order.
    ///
    /// An empty `start` means "from the first key"; an empty `end` means
    /// "through the last key". `("", "")` scans the full keyspace.
    fn range_scan(&self, start: &str, end: &str) -> StoreResult<RangeCursor>;
}

/// Cursor over a range-scan result.
///
/// Forward-only and non-restartable: the entries are a snapshot materialized
/// at scan time, yielded once in key order. The cursor owns everything it
/// needs and releases it on drop, so every exit path cleans up, whether the
/// cursor is exhausted or dropped early.
pub struct RangeCursor {
    entries: std::vec::IntoIter<(String, Vec<u8>)>,
}

impl RangeCursor {
    /// Build a cursor from already-ordered `(key, value)` pairs.
    pub fn new(entries: Vec<(String, Vec<u8>)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl Iterator for RangeCursor {
    type Item = (String, Vec<u8>);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for RangeCursor {}

impl std::fmt::Debug for RangeCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCursor")
            .field("remaining", &self.entries.len())
            .finish()
    }
}
