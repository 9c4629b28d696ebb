use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::{format_inr, round_paise};

/// GST owed over a date range, split by component and by rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GstLiabilityReport {
    /// Start date of the reporting period (inclusive)
    pub from: NaiveDate,
    /// End date of the reporting period (inclusive)
    pub to: NaiveDate,
    /// Financial year label when the report covers one whole year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_year: Option<String>,
    pub invoice_count: usize,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    /// cgst + sgst + igst
    pub total: Decimal,
    /// Tax already remitted for the period
    pub paid: Decimal,
    /// total − paid; negative when overpaid
    pub pending: Decimal,
    pub formatted_total: String,
    /// One entry per combined rate, ascending
    pub rates: Vec<RateLiability>,
}

/// Taxable value and tax collected at one combined GST rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateLiability {
    pub gst_rate: Decimal,
    pub line_count: usize,
    pub taxable_value: Decimal,
    pub tax_amount: Decimal,
}

impl GstLiabilityReport {
    pub fn new(
        from: NaiveDate,
        to: NaiveDate,
        invoice_count: usize,
        components: (Decimal, Decimal, Decimal),
        paid: Decimal,
        rates: Vec<RateLiability>,
    ) -> Self {
        let (cgst, sgst, igst) = components;
        let total = round_paise(cgst + sgst + igst);

        Self {
            from,
            to,
            financial_year: None,
            invoice_count,
            cgst,
            sgst,
            igst,
            total,
            paid,
            pending: round_paise(total - paid),
            formatted_total: format_inr(total),
            rates,
        }
    }

    pub fn with_financial_year(mut self, label: impl Into<String>) -> Self {
        self.financial_year = Some(label.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.invoice_count == 0
    }
}
