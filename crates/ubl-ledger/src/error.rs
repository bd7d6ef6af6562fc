use thiserror::Error;

use ubl_store::StoreError;

/// Errors produced by ledger record operations.
///
/// Every failure names the offending key. None of these are retried
/// internally; retry, if any, belongs to the host transaction framework.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("record id must not be empty")]
    EmptyId,

    #[error("the record {id} does not exist")]
    NotFound { id: String },

    #[error("the record {id} already exists")]
    AlreadyExists { id: String },

    #[error("failed to encode record {id}: {reason}")]
    Encode { id: String, reason: String },

    #[error("cannot decode record {id}: {reason}")]
    Decode { id: String, reason: String },

    #[error("world state failure: {0}")]
    Store(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
