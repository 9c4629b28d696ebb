use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::InvoiceLineItem;
use crate::core::period::today_in_india;

/// Input to the invoice engine.
///
/// The seller's GSTIN comes from the caller's business profile; the engine
/// does not fetch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub seller_gstin: String,
    pub buyer_name: String,
    /// Absent for unregistered (consumer) buyers
    pub buyer_gstin: Option<String>,
    /// Two-digit state code; consulted only when `buyer_gstin` is absent
    pub place_of_supply: Option<String>,
    /// Creation date; drives the numbering period
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    /// Distance goods travel, for the e-way bill threshold
    pub transport_distance_km: Option<Decimal>,
    pub items: Vec<InvoiceLineItem>,
    pub notes: Option<String>,
}

impl InvoiceRequest {
    pub fn new(
        seller_gstin: impl Into<String>,
        buyer_name: impl Into<String>,
        invoice_date: NaiveDate,
        items: Vec<InvoiceLineItem>,
    ) -> Self {
        Self {
            seller_gstin: seller_gstin.into(),
            buyer_name: buyer_name.into(),
            buyer_gstin: None,
            place_of_supply: None,
            invoice_date,
            due_date: None,
            transport_distance_km: None,
            items,
            notes: None,
        }
    }

    pub fn with_buyer_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.buyer_gstin = Some(gstin.into());
        self
    }

    pub fn with_place_of_supply(mut self, state_code: impl Into<String>) -> Self {
        self.place_of_supply = Some(state_code.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_transport_distance(mut self, km: Decimal) -> Self {
        self.transport_distance_km = Some(km);
        self
    }
}

/// Body of `POST /invoices`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    pub seller_gstin: String,
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_gstin: Option<String>,
    #[serde(default)]
    pub place_of_supply: Option<String>,
    /// Defaults to today in India Standard Time
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub transport_distance_km: Option<Decimal>,
    pub items: Vec<InvoiceLineItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateInvoiceRequest> for InvoiceRequest {
    fn from(request: CreateInvoiceRequest) -> Self {
        Self {
            seller_gstin: request.seller_gstin,
            buyer_name: request.buyer_name,
            buyer_gstin: request.buyer_gstin,
            place_of_supply: request.place_of_supply,
            invoice_date: request.invoice_date.unwrap_or_else(today_in_india),
            due_date: request.due_date,
            transport_distance_km: request.transport_distance_km,
            items: request.items,
            notes: request.notes,
        }
    }
}
