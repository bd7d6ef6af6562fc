use tracing::{debug, info};

use ubl_store::WorldState;
use ubl_types::{Invoice, LedgerRecord, Reading};

use crate::error::LedgerError;
use crate::seed::demo_invoices;
use crate::traits::{RecordReader, RecordWriter};

/// Stateless implementation of the ledger record operations.
///
/// All state lives in the world state store; the manager is a pure
/// operation set. Each call is a self-contained unit of work against the
/// transaction view passed in by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordManager;

impl RecordManager {
    pub fn new() -> Self {
        Self
    }
}

fn encode_record(id: &str, record: LedgerRecord) -> Result<Vec<u8>, LedgerError> {
    record.encode().map_err(|e| LedgerError::Encode {
        id: id.to_string(),
        reason: e.to_string(),
    })
}

fn decode_invoice(id: &str, bytes: &[u8]) -> Result<Invoice, LedgerError> {
    LedgerRecord::decode(bytes)
        .and_then(LedgerRecord::into_invoice)
        .map_err(|e| LedgerError::Decode {
            id: id.to_string(),
            reason: e.to_string(),
        })
}

impl RecordWriter for RecordManager {
    fn create_invoice(
        &self,
        state: &mut dyn WorldState,
        invoice: Invoice,
    ) -> Result<(), LedgerError> {
        if invoice.id.is_empty() {
            return Err(LedgerError::EmptyId);
        }
        if self.exists(&*state, &invoice.id)? {
            return Err(LedgerError::AlreadyExists { id: invoice.id });
        }

        let id = invoice.id.clone();
        let bytes = encode_record(&id, LedgerRecord::from(invoice))?;
        state.put(&id, bytes)?;
        debug!(id = %id, "invoice created");
        Ok(())
    }

    fn update_invoice(
        &self,
        state: &mut dyn WorldState,
        invoice: Invoice,
    ) -> Result<(), LedgerError> {
        if !self.exists(&*state, &invoice.id)? {
            return Err(LedgerError::NotFound { id: invoice.id });
        }

        let id = invoice.id.clone();
        let bytes = encode_record(&id, LedgerRecord::from(invoice))?;
        state.put(&id, bytes)?;
        debug!(id = %id, "invoice replaced");
        Ok(())
    }

    fn delete_invoice(&self, state: &mut dyn WorldState, id: &str) -> Result<(), LedgerError> {
        if !self.exists(&*state, id)? {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }
        state.delete(id)?;
        debug!(id, "invoice deleted");
        Ok(())
    }

    fn record_reading(
        &self,
        state: &mut dyn WorldState,
        reading_id: &str,
        invoice_id: &str,
        reading: Reading,
    ) -> Result<(), LedgerError> {
        let value = reading.interval_reading.value;
        let bytes = encode_record(reading_id, LedgerRecord::from(reading))?;
        state.put(reading_id, bytes)?;

        // If the parent is missing or not an invoice, the whole transaction
        // aborts and the reading written above never becomes durable.
        let invoice_bytes =
            state
                .get(invoice_id)?
                .ok_or_else(|| LedgerError::NotFound {
                    id: invoice_id.to_string(),
                })?;
        let mut invoice = decode_invoice(invoice_id, &invoice_bytes)?;
        invoice.consumption += value;

        // The accumulated total goes back under the invoice's own key.
        let bytes = encode_record(invoice_id, LedgerRecord::from(invoice))?;
        state.put(invoice_id, bytes)?;
        debug!(reading_id, invoice_id, value, "reading recorded");
        Ok(())
    }

    fn reset_demo_data(&self, state: &mut dyn WorldState) -> Result<(), LedgerError> {
        let seeds = demo_invoices();
        let count = seeds.len();
        for invoice in seeds {
            let id = invoice.id.clone();
            let bytes = encode_record(&id, LedgerRecord::from(invoice))?;
            state.put(&id, bytes)?;
        }
        info!(count, "demo invoices reset to seed values");
        Ok(())
    }
}

impl RecordReader for RecordManager {
    fn read_invoice(&self, state: &dyn WorldState, id: &str) -> Result<Invoice, LedgerError> {
        let bytes = state.get(id)?.ok_or_else(|| LedgerError::NotFound {
            id: id.to_string(),
        })?;
        decode_invoice(id, &bytes)
    }

    fn exists(&self, state: &dyn WorldState, id: &str) -> Result<bool, LedgerError> {
        Ok(state.get(id)?.is_some())
    }

    fn list_all_invoices(&self, state: &dyn WorldState) -> Result<Vec<Invoice>, LedgerError> {
        let cursor = state.range_scan("", "")?;
        let mut invoices = Vec::new();
        for (key, bytes) in cursor {
            let record = LedgerRecord::decode(&bytes).map_err(|e| LedgerError::Decode {
                id: key.clone(),
                reason: e.to_string(),
            })?;
            match record {
                LedgerRecord::Invoice(invoice) => invoices.push(invoice),
                // Readings legitimately share the namespace; not an error.
                LedgerRecord::Reading(_) => {
                    debug!(key = %key, "skipping reading record in invoice scan");
                }
            }
        }
        Ok(invoices)
    }
}
