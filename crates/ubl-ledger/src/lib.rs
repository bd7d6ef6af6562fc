//! Ledger record manager for the Utility Billing Ledger (UBL).
//!
//! This crate is the heart of UBL. It provides:
//! - `RecordReader` / `RecordWriter` trait boundaries
//! - [`RecordManager`], the stateless implementation of every public
//!   operation: existence-guarded CRUD over invoices, the composite
//!   reading-accumulation operation, full-range enumeration, and the demo
//!   seed reset
//! - [`LedgerError`], the inspectable error taxonomy
//!
//! Every operation takes the transaction view ([`ubl_store::WorldState`])
//! as its first parameter; the host store supplies the enclosing
//! all-or-nothing transaction boundary, one public operation per
//! transaction. The manager holds no state of its own across calls.

pub mod error;
pub mod manager;
pub mod seed;
pub mod traits;

pub use error::LedgerError;
pub use manager::RecordManager;
pub use seed::demo_invoices;
pub use traits::{RecordReader, RecordWriter};
