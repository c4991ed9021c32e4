//! Invoice fixtures for table stories

use chrono::NaiveDate;

/// Payment status of an invoice row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Unpaid,
}

impl InvoiceStatus {
    /// Display label for badges and table cells
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Unpaid => "Unpaid",
        }
    }
}

/// A mock invoice row
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: &'static str,
    pub status: InvoiceStatus,
    pub method: &'static str,
    pub amount: &'static str,
    pub issued: NaiveDate,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Invoice rows used by the table and data-table stories
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV001",
            status: InvoiceStatus::Paid,
            method: "Credit Card",
            amount: "$250.00",
            issued: date(2026, 1, 12),
        },
        Invoice {
            id: "INV002",
            status: InvoiceStatus::Pending,
            method: "PayPal",
            amount: "$150.00",
            issued: date(2026, 2, 3),
        },
        Invoice {
            id: "INV003",
            status: InvoiceStatus::Unpaid,
            method: "Bank Transfer",
            amount: "$350.00",
            issued: date(2026, 2, 21),
        },
        Invoice {
            id: "INV004",
            status: InvoiceStatus::Paid,
            method: "Credit Card",
            amount: "$450.00",
            issued: date(2026, 3, 7),
        },
        Invoice {
            id: "INV005",
            status: InvoiceStatus::Paid,
            method: "PayPal",
            amount: "$550.00",
            issued: date(2026, 3, 30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_ids_are_distinct() {
        let rows = invoices();
        let mut ids: Vec<_> = rows.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rows.len());
    }

    #[test]
    fn issued_dates_are_valid() {
        for row in invoices() {
            assert_ne!(row.issued, NaiveDate::default(), "invoice {}", row.id);
        }
    }
}
