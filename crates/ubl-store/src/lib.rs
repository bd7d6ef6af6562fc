//! World-state storage abstraction for the Utility Billing Ledger (UBL).
//!
//! The ledger core never talks to a database directly. It sees one
//! transaction at a time through the [`WorldState`] trait: put/get/delete
//! plus an ordered range scan, all executed inside an all-or-nothing
//! transaction boundary supplied by the host store.
//!
//! # Storage Backends
//!
//! - [`MemoryStore`] — `BTreeMap`-based transactional store for tests and
//!   embedding. [`MemoryStore::transact`] runs a closure against a buffered
//!   transaction view and commits its writes only on `Ok`.
//!
//! # Design Rules
//!
//! 1. `put` is an unconditional overwrite; there is no compare-and-swap.
//! 2. `get` of an unset key is `Ok(None)`, never an error.
//! 3. Writes and deletes are visible to later reads in the same transaction.
//! 4. Transactions are serialized; a failed transaction leaves no trace.
//! 5. Range scans return a snapshot in key order; the cursor releases its
//!    resources on drop, on every exit path.
//! 6. The store never interprets stored bytes; it is a pure key-value store.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{RangeCursor, WorldState};
