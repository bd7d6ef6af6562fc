use serde::{Deserialize, Serialize};

/// A utility billing record.
///
/// Invoices are keyed in the world state by [`Invoice::id`]. The ID is
/// immutable once the record is created; every other field is replaced
/// wholesale on update. Partial-field merges are not supported, so callers
/// always supply the complete desired state.
///
/// The serde tags are the external storage contract (see crate docs) and
/// predate this implementation; they stay as-is even where they diverge
/// from the Rust field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Primary key in the world state.
    #[serde(rename = "ID")]
    pub id: String,
    /// Account holder name.
    #[serde(rename = "consumidor")]
    pub consumer: String,
    /// Accumulated consumption in kWh. Grows as readings are recorded.
    #[serde(rename = "consumo")]
    pub consumption: f64,
    /// Monetary value of the invoice.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// Free-text status label ("Aberta", "Fechada", ...). Stored opaquely;
    /// no transition rules are enforced here.
    #[serde(rename = "estado")]
    pub state: String,
    /// Invoice number.
    #[serde(rename = "numero")]
    pub number: String,
    /// Opening date, free-text.
    #[serde(rename = "dataAbertura")]
    pub open_date: String,
    /// Closing date, free-text. Empty means "not yet closed".
    #[serde(rename = "dataFechamento")]
    pub close_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Invoice {
        Invoice {
            id: "fatura9".into(),
            consumer: "Ana".into(),
            consumption: 42.5,
            amount: 120.0,
            state: "Aberta".into(),
            number: "990001".into(),
            open_date: "01/08/2020".into(),
            close_date: String::new(),
        }
    }

    #[test]
    fn serde_roundtrip() {
        let invoice = sample();
        let json = serde_json::to_string(&invoice).unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(invoice, parsed);
    }

    #[test]
    fn wire_tags_are_stable() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for tag in [
            "ID",
            "consumidor",
            "consumo",
            "valor",
            "estado",
            "numero",
            "dataAbertura",
            "dataFechamento",
        ] {
            assert!(obj.contains_key(tag), "missing wire tag {tag}");
        }
        // Rust field names must not leak into the wire format.
        assert!(!obj.contains_key("consumer"));
        assert!(!obj.contains_key("open_date"));
    }

    #[test]
    fn empty_close_date_survives() {
        let invoice = sample();
        let json = serde_json::to_string(&invoice).unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.close_date, "");
    }
}
