use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::invoice::Invoice;
use crate::reading::Reading;

/// The kind of record stored under a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A billing record.
    Invoice,
    /// A metering observation.
    Reading,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoice => write!(f, "invoice"),
            Self::Reading => write!(f, "reading"),
        }
    }
}

/// The stored-record envelope.
///
/// Invoices and readings share one flat keyspace with no type information
/// in the key, so every stored value carries a `docType` discriminant.
/// Decode paths and the range scan use it to tell the kinds apart
/// structurally instead of relying on accidental decode failure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "docType")]
pub enum LedgerRecord {
    #[serde(rename = "invoice")]
    Invoice(Invoice),
    #[serde(rename = "reading")]
    Reading(Reading),
}

impl LedgerRecord {
    /// The discriminant of this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Invoice(_) => RecordKind::Invoice,
            Self::Reading(_) => RecordKind::Reading,
        }
    }

    /// Serialize to the stored byte representation.
    pub fn encode(&self) -> Result<Vec<u8>, RecordError> {
        serde_json::to_vec(self).map_err(|e| RecordError::Encode {
            kind: self.kind(),
            reason: e.to_string(),
        })
    }

    /// Decode stored bytes back to a typed record.
    pub fn decode(bytes: &[u8]) -> Result<Self, RecordError> {
        serde_json::from_slice(bytes).map_err(|e| RecordError::Malformed(e.to_string()))
    }

    /// Unwrap as an invoice, failing if the record holds a reading.
    pub fn into_invoice(self) -> Result<Invoice, RecordError> {
        match self {
            Self::Invoice(invoice) => Ok(invoice),
            Self::Reading(_) => Err(RecordError::KindMismatch {
                expected: RecordKind::Invoice,
                found: RecordKind::Reading,
            }),
        }
    }

    /// Unwrap as a reading, failing if the record holds an invoice.
    pub fn into_reading(self) -> Result<Reading, RecordError> {
        match self {
            Self::Reading(reading) => Ok(reading),
            Self::Invoice(_) => Err(RecordError::KindMismatch {
                expected: RecordKind::Reading,
                found: RecordKind::Invoice,
            }),
        }
    }
}

impl From<Invoice> for LedgerRecord {
    fn from(invoice: Invoice) -> Self {
        Self::Invoice(invoice)
    }
}

impl From<Reading> for LedgerRecord {
    fn from(reading: Reading) -> Self {
        Self::Reading(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::{IntervalReading, Meter};
    use proptest::prelude::*;

    fn make_invoice(id: &str) -> Invoice {
        Invoice {
            id: id.into(),
            consumer: "Rodrigo".into(),
            consumption: 15.5,
            amount: 65.0,
            state: "Aberta".into(),
            number: "8453244".into(),
            open_date: "01/07/2020".into(),
            close_date: String::new(),
        }
    }

    fn make_reading() -> Reading {
        Reading {
            meter: Meter {
                id: "meter-1".into(),
                id_type: "serial".into(),
                id_namespace: "br.utility".into(),
            },
            reading_type_id: "kwh".into(),
            interval_reading: IntervalReading {
                end_time: "2020-07-02T00:00:00".into(),
                value: 1.5,
                flags: String::new(),
            },
        }
    }

    // -----------------------------------------------------------------------
    // Encode / decode
    // -----------------------------------------------------------------------

    #[test]
    fn invoice_roundtrip() {
        let record = LedgerRecord::from(make_invoice("fatura1"));
        let bytes = record.encode().unwrap();
        let decoded = LedgerRecord::decode(&bytes).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn reading_roundtrip() {
        let record = LedgerRecord::from(make_reading());
        let bytes = record.encode().unwrap();
        let decoded = LedgerRecord::decode(&bytes).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn envelope_carries_doc_type_tag() {
        let bytes = LedgerRecord::from(make_invoice("a")).encode().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["docType"], "invoice");

        let bytes = LedgerRecord::from(make_reading()).encode().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["docType"], "reading");
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = LedgerRecord::decode(b"not json at all").unwrap_err();
        assert!(matches!(err, RecordError::Malformed(_)));
    }

    #[test]
    fn decode_rejects_untagged_value() {
        // Valid JSON, but no docType discriminant.
        let err = LedgerRecord::decode(br#"{"ID":"x","consumo":1.0}"#).unwrap_err();
        assert!(matches!(err, RecordError::Malformed(_)));
    }

    #[test]
    fn decode_rejects_unknown_kind() {
        let err = LedgerRecord::decode(br#"{"docType":"widget"}"#).unwrap_err();
        assert!(matches!(err, RecordError::Malformed(_)));
    }

    // -----------------------------------------------------------------------
    // Kind dispatch
    // -----------------------------------------------------------------------

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            LedgerRecord::from(make_invoice("a")).kind(),
            RecordKind::Invoice
        );
        assert_eq!(LedgerRecord::from(make_reading()).kind(), RecordKind::Reading);
    }

    #[test]
    fn into_invoice_on_reading_fails() {
        let err = LedgerRecord::from(make_reading()).into_invoice().unwrap_err();
        assert_eq!(
            err,
            RecordError::KindMismatch {
                expected: RecordKind::Invoice,
                found: RecordKind::Reading,
            }
        );
    }

    #[test]
    fn into_reading_on_invoice_fails() {
        let err = LedgerRecord::from(make_invoice("a")).into_reading().unwrap_err();
        assert!(matches!(err, RecordError::KindMismatch { .. }));
    }

    #[test]
    fn record_kind_display() {
        assert_eq!(format!("{}", RecordKind::Invoice), "invoice");
        assert_eq!(format!("{}", RecordKind::Reading), "reading");
    }

    // -----------------------------------------------------------------------
    // Property tests
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn arbitrary_invoice_roundtrips(
            id in ".*",
            consumer in ".*",
            consumption in -1e12f64..1e12,
            amount in -1e12f64..1e12,
            state in ".*",
            number in ".*",
            open_date in ".*",
            close_date in ".*",
        ) {
            let record = LedgerRecord::Invoice(Invoice {
                id,
                consumer,
                consumption,
                amount,
                state,
                number,
                open_date,
                close_date,
            });
            let bytes = record.encode().unwrap();
            let decoded = LedgerRecord::decode(&bytes).unwrap();
            prop_assert_eq!(record, decoded);
        }

        #[test]
        fn arbitrary_reading_roundtrips(
            meter_id in ".*",
            end_time in ".*",
            value in -1e12f64..1e12,
            flags in ".*",
        ) {
            let record = LedgerRecord::Reading(Reading {
                meter: Meter {
                    id: meter_id,
                    id_type: "serial".into(),
                    id_namespace: "test".into(),
                },
                reading_type_id: "kwh".into(),
                interval_reading: IntervalReading { end_time, value, flags },
            });
            let bytes = record.encode().unwrap();
            let decoded = LedgerRecord::decode(&bytes).unwrap();
            prop_assert_eq!(record, decoded);
        }
    }
}
