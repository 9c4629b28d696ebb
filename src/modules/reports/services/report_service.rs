use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::round_paise;
use crate::core::period::financial_year_bounds;
use crate::core::{AppError, Result};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::reports::models::{GstLiabilityReport, RateLiability};

/// Builds GST liability reports from the invoice register
pub struct ReportService {
    invoices: Arc<dyn InvoiceRepository>,
}

impl ReportService {
    pub fn new(invoices: Arc<dyn InvoiceRepository>) -> Self {
        Self { invoices }
    }

    /// GST collected on invoices dated in `[from, to]`, less what was paid
    ///
    /// # Errors
    /// `Validation` on `from` if the range is inverted
    pub fn gst_liability(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        paid: Decimal,
    ) -> Result<GstLiabilityReport> {
        if from > to {
            return Err(AppError::validation(
                "from",
                format!("Start date {} is after end date {}", from, to),
            ));
        }
        if paid < Decimal::ZERO {
            return Err(AppError::validation(
                "paid",
                format!("Paid amount must be non-negative, got: {}", paid),
            ));
        }

        let invoices = self.invoices.list_between(from, to)?;

        let mut cgst = Decimal::ZERO;
        let mut sgst = Decimal::ZERO;
        let mut igst = Decimal::ZERO;
        let mut by_rate: BTreeMap<Decimal, RateLiability> = BTreeMap::new();

        for invoice in &invoices {
            cgst += invoice.cgst_total();
            sgst += invoice.sgst_total();
            igst += invoice.igst_total();

            for line in invoice.items() {
                let entry = by_rate
                    .entry(line.gst_rate.normalize())
                    .or_insert_with(|| RateLiability {
                        gst_rate: line.gst_rate.normalize(),
                        line_count: 0,
                        taxable_value: Decimal::ZERO,
                        tax_amount: Decimal::ZERO,
                    });
                entry.line_count += 1;
                entry.taxable_value += line.taxable_value;
                entry.tax_amount += line.tax_amount();
            }
        }

        debug!(
            from = %from,
            to = %to,
            invoices = invoices.len(),
            rates = by_rate.len(),
            "GST liability computed"
        );

        Ok(GstLiabilityReport::new(
            from,
            to,
            invoices.len(),
            (round_paise(cgst), round_paise(sgst), round_paise(igst)),
            round_paise(paid),
            by_rate.into_values().collect(),
        ))
    }

    /// Liability for a whole financial year such as `2024-25`
    pub fn gst_liability_for_year(&self, label: &str, paid: Decimal) -> Result<GstLiabilityReport> {
        let (from, to) = financial_year_bounds(label)?;
        Ok(self.gst_liability(from, to, paid)?.with_financial_year(label))
    }
}
