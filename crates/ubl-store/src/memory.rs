use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use tracing::debug;

use crate::error::StoreResult;
use crate::traits::{RangeCursor, WorldState};

/// In-memory, `BTreeMap`-based transactional world state.
///
/// Intended for tests and embedding. [`MemoryStore::transact`] provides the
/// all-or-nothing transaction boundary the ledger core relies on: the
/// closure works against a buffered view, and the buffer is applied to the
/// base map only when the closure returns `Ok`. Transactions are serialized
/// by holding the store's write lock for the duration of the closure.
pub struct MemoryStore {
    cells: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            cells: RwLock::new(BTreeMap::new()),
        }
    }

    /// Run `f` inside one atomic transaction.
    ///
    /// Every `put` and `delete` issued through the view is buffered. On
    /// `Ok` the buffer is applied to the base map as a unit; on `Err` it is
    /// discarded and the store is left exactly as it was.
    pub fn transact<T, E>(
        &self,
        f: impl FnOnce(&mut dyn WorldState) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut cells = self.cells.write().expect("lock poisoned");
        let (value, pending) = {
            let mut view = TxnView {
                base: &*cells,
                pending: BTreeMap::new(),
            };
            let value = f(&mut view)?;
            (value, view.pending)
        };
        debug!(writes = pending.len(), "transaction committed");
        for (key, cell) in pending {
            match cell {
                Some(bytes) => {
                    cells.insert(key, bytes);
                }
                None => {
                    cells.remove(&key);
                }
            }
        }
        Ok(value)
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.cells.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.cells.read().expect("lock poisoned").is_empty()
    }

    /// Remove every key from the store.
    pub fn clear(&self) {
        self.cells.write().expect("lock poisoned").clear();
    }

    /// All keys in lexicographic order.
    pub fn keys(&self) -> Vec<String> {
        self.cells
            .read()
            .expect("lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("key_count", &self.len())
            .finish()
    }
}

/// Buffered transaction view over the committed base map.
///
/// `pending` layers on top of `base`: `Some(bytes)` is a buffered write,
/// `None` a buffered delete (tombstone).
struct TxnView<'a> {
    base: &'a BTreeMap<String, Vec<u8>>,
    pending: BTreeMap<String, Option<Vec<u8>>>,
}

fn key_bounds<'a>(start: &'a str, end: &'a str) -> (Bound<&'a str>, Bound<&'a str>) {
    let lower = if start.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Included(start)
    };
    let upper = if end.is_empty() {
        Bound::Unbounded
    } else {
        Bound::Excluded(end)
    };
    (lower, upper)
}

impl WorldState for TxnView<'_> {
    fn put(&mut self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        self.pending.insert(key.to_string(), Some(value));
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match self.pending.get(key) {
            Some(cell) => Ok(cell.clone()),
            None => Ok(self.base.get(key).cloned()),
        }
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.pending.insert(key.to_string(), None);
        Ok(())
    }

    fn range_scan(&self, start: &str, end: &str) -> StoreResult<RangeCursor> {
        let bounds = key_bounds(start, end);
        let mut merged: BTreeMap<String, Vec<u8>> = self
            .base
            .range::<str, _>(bounds)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, cell) in self.pending.range::<str, _>(bounds) {
            match cell {
                Some(bytes) => {
                    merged.insert(key.clone(), bytes.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Ok(RangeCursor::new(merged.into_iter().collect()))
    }
}
