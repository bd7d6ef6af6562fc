//! Record model for the Utility Billing Ledger (UBL).
//!
//! This crate defines the entities stored in the world state and their wire
//! contract. Every other UBL crate depends on `ubl-types`.
//!
//! # Key Types
//!
//! - [`Invoice`] — the primary billing record, keyed by an opaque string ID
//! - [`Reading`] — an immutable metering observation (embeds [`Meter`] and
//!   [`IntervalReading`])
//! - [`LedgerRecord`] — the stored-record envelope that tags every value
//!   with its kind, so the two record families can share one flat keyspace
//! - [`RecordKind`] — the `docType` discriminant
//!
//! # Wire Contract
//!
//! Records are stored as JSON. The external field tags (`consumidor`,
//! `consumo`, `valor`, ...) are a stable contract: other systems read these
//! records directly from the ledger, so renaming a Rust field must never
//! change its tag.

pub mod error;
pub mod invoice;
pub mod reading;
pub mod record;

pub use error::RecordError;
pub use invoice::Invoice;
pub use reading::{IntervalReading, Meter, Reading};
pub use record::{LedgerRecord, RecordKind};
