// Invoice register
//
// Stores finalized invoices for lookup and reporting. Invoices are inserted
// once and never updated.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::Invoice;

/// Persistence for finalized invoices
pub trait InvoiceRepository: Send + Sync {
    /// Store a new invoice; a repeated invoice number is rejected
    fn save(&self, invoice: Invoice) -> Result<()>;

    /// Find an invoice by its printed number
    fn find_by_number(&self, invoice_number: &str) -> Result<Option<Invoice>>;

    /// Invoices dated within `[from, to]`, ordered by number
    fn list_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Invoice>>;
}

/// In-memory register keyed by invoice number
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: RwLock<BTreeMap<String, Invoice>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> AppError {
    AppError::internal("invoice register lock poisoned")
}

impl InvoiceRepository for InMemoryInvoiceRepository {
    fn save(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().map_err(|_| poisoned())?;
        let number = invoice.invoice_number().as_str().to_string();

        if invoices.contains_key(&number) {
            return Err(AppError::validation(
                "invoice_number",
                format!("Invoice {} already exists", number),
            ));
        }

        invoices.insert(number, invoice);
        Ok(())
    }

    fn find_by_number(&self, invoice_number: &str) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().map_err(|_| poisoned())?;
        Ok(invoices.get(invoice_number).cloned())
    }

    fn list_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().map_err(|_| poisoned())?;

        let mut listed: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| (from..=to).contains(&invoice.invoice_date()))
            .cloned()
            .collect();

        // Keys compare as text, so INV/2403/10000 would precede INV/2403/9999
        listed.sort_by(|a, b| {
            (a.period(), a.sequence(), a.invoice_number().as_str())
                .cmp(&(b.period(), b.sequence(), b.invoice_number().as_str()))
        });

        Ok(listed)
    }
}
