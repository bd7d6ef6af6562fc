use serde::{Deserialize, Serialize};

/// Descriptive identity of a metering device.
///
/// A meter has no independent lifecycle in the ledger; it exists only
/// embedded inside a [`Reading`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    pub id: String,
    #[serde(rename = "idType")]
    pub id_type: String,
    #[serde(rename = "idNameSpace")]
    pub id_namespace: String,
}

/// A single measured interval: what was read, when, and any flags the
/// metering head attached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalReading {
    #[serde(rename = "endTime")]
    pub end_time: String,
    /// Measured value, in the same unit the parent invoice accumulates.
    pub value: f64,
    /// Opaque metadata from the metering device.
    pub flags: String,
}

/// A metering observation linked to one invoice via the accumulation
/// operation.
///
/// Readings are immutable after creation: the ledger core never updates or
/// deletes them. They share the invoice keyspace, so their keys must not
/// collide with invoice IDs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub meter: Meter,
    #[serde(rename = "readingTypeId")]
    pub reading_type_id: String,
    #[serde(rename = "intervalReading")]
    pub interval_reading: IntervalReading,
}
