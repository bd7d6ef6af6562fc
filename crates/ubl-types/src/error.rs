use thiserror::Error;

use crate::record::RecordKind;

/// Errors produced by record encode/decode operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("failed to encode {kind} record: {reason}")]
    Encode { kind: RecordKind, reason: String },

    #[error("malformed record bytes: {0}")]
    Malformed(String),

    #[error("expected {expected} record, found {found}")]
    KindMismatch {
        expected: RecordKind,
        found: RecordKind,
    },
}
