use ubl_types::Invoice;

/// The fixed demo invoice set written by
/// [`reset_demo_data`](crate::traits::RecordWriter::reset_demo_data).
///
/// The IDs and field values are part of the external contract: downstream
/// demos and tests read `fatura1`..`fatura4` back by name.
pub fn demo_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "fatura1".into(),
            consumer: "Rodrigo".into(),
            consumption: 15.5,
            amount: 65.0,
            state: "Aberta".into(),
            number: "8453244".into(),
            open_date: "01/07/2020".into(),
            close_date: String::new(),
        },
        Invoice {
            id: "fatura2".into(),
            consumer: "Thais".into(),
            consumption: 12.0,
            amount: 60.0,
            state: "Aberta".into(),
            number: "756456456".into(),
            open_date: "01/07/2020".into(),
            close_date: String::new(),
        },
        Invoice {
            id: "fatura3".into(),
            consumer: "Marcelo".into(),
            consumption: 13.0,
            amount: 61.0,
            state: "Aberta".into(),
            number: "4564567".into(),
            open_date: "01/07/2020".into(),
            close_date: String::new(),
        },
        Invoice {
            id: "fatura4".into(),
            consumer: "Maria".into(),
            consumption: 14.0,
            amount: 62.0,
            state: "Aberta".into(),
            number: "46456453".into(),
            open_date: "01/07/2020".into(),
            close_date: String::new(),
        },
    ]
}
