use ubl_store::WorldState;
use ubl_types::{Invoice, Reading};

use crate::error::LedgerError;

/// Write boundary for ledger record mutations.
///
/// Each method is one unit of work against the world state; the caller
/// wraps it in the host store's transaction boundary.
pub trait RecordWriter: Send + Sync {
    /// Create a new invoice under `invoice.id`.
    ///
    /// Fails with [`LedgerError::AlreadyExists`] if any record is already
    /// stored under that ID, invoice or reading alike; the check is
    /// existence-only.
    fn create_invoice(
        &self,
        state: &mut dyn WorldState,
        invoice: Invoice,
    ) -> Result<(), LedgerError>;

    /// Replace the record under `invoice.id` wholesale.
    ///
    /// There is no partial-field merge: callers supply the complete desired
    /// state, including fields unchanged from before.
    fn update_invoice(
        &self,
        state: &mut dyn WorldState,
        invoice: Invoice,
    ) -> Result<(), LedgerError>;

    /// Delete the record under `id`.
    fn delete_invoice(&self, state: &mut dyn WorldState, id: &str) -> Result<(), LedgerError>;

    /// Store a reading under `reading_id` and add its measured value to the
    /// consumption of the invoice under `invoice_id`, atomically as a unit.
    fn record_reading(
        &self,
        state: &mut dyn WorldState,
        reading_id: &str,
        invoice_id: &str,
        reading: Reading,
    ) -> Result<(), LedgerError>;

    /// Reset the fixed demo invoice set to its seed values.
    ///
    /// Each seed record is written unconditionally, so re-invocation
    /// silently restores those IDs no matter what they hold.
    fn reset_demo_data(&self, state: &mut dyn WorldState) -> Result<(), LedgerError>;
}

/// Read boundary for ledger record queries.
pub trait RecordReader: Send + Sync {
    /// Read and decode the invoice under `id`.
    fn read_invoice(&self, state: &dyn WorldState, id: &str) -> Result<Invoice, LedgerError>;

    /// Whether any record of either kind is present under `id`.
    fn exists(&self, state: &dyn WorldState, id: &str) -> Result<bool, LedgerError>;

    /// Every invoice in the world state, in store key order.
    fn list_all_invoices(&self, state: &dyn WorldState) -> Result<Vec<Invoice>, LedgerError>;
}
