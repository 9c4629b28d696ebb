use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::money::max_invoice_value;
use crate::core::{AppError, PeriodKey, Result};
use crate::modules::identifiers::models::TaxIdentifier;
use crate::modules::invoices::models::{
    Invoice, InvoiceLine, InvoiceNumber, InvoiceParts, InvoiceRequest, InvoiceTotals,
    RunningTotals,
};
use crate::modules::invoices::repositories::SequenceStore;
use crate::modules::invoices::services::amount_in_words::amount_in_words;
use crate::modules::invoices::services::e_way_bill::is_e_way_bill_required;
use crate::modules::jurisdiction::services::{is_known_jurisdiction, resolve_supply, ResolvedSupply};
use crate::modules::taxes::repositories::RateCatalog;
use crate::modules::taxes::services::TaxCalculator;

/// Identifiers that survived validation
struct ValidatedParties {
    seller: TaxIdentifier,
    buyer: Option<TaxIdentifier>,
    place_of_supply: Option<String>,
}

/// Builds finalized invoices from requests
///
/// Steps, strictly in order: validate, resolve jurisdiction once, price each
/// line, round the grand total, take the next sequence number, render words.
/// Anything that fails before numbering leaves the sequence untouched, and no
/// partially built invoice is ever returned.
///
/// Line and invoice values are capped at `MAX_INVOICE_VALUE`, so pricing and
/// rounding cannot overflow.
pub struct InvoiceAssembler {
    rate_catalog: Arc<dyn RateCatalog>,
    sequence_store: Arc<dyn SequenceStore>,
    calculator: TaxCalculator,
    prefix: String,
}

impl InvoiceAssembler {
    pub fn new(
        rate_catalog: Arc<dyn RateCatalog>,
        sequence_store: Arc<dyn SequenceStore>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            rate_catalog,
            sequence_store,
            calculator: TaxCalculator::new(),
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Create a finalized invoice
    ///
    /// # Errors
    /// * `Validation` - first malformed or missing field
    /// * `UnknownClassification` - an item's HSN code is not in the catalog
    /// * `Configuration` - the catalog returned a rate outside 0-100
    /// * `SequenceUnavailable` - no invoice number could be obtained; retry
    pub fn create_invoice(&self, request: InvoiceRequest) -> Result<Invoice> {
        let parties = Self::validate(&request)?;

        let supply = resolve_supply(
            &parties.seller,
            parties.buyer.as_ref(),
            parties.place_of_supply.as_deref(),
        );

        let (lines, totals) = self.price_items(&request, &supply)?;

        let rupees = whole_rupees(&totals)?;

        let period = PeriodKey::from_date(request.invoice_date);
        let sequence = self.sequence_store.next_sequence(&period)?;
        let invoice_number = InvoiceNumber::new(&self.prefix, &period, sequence);

        let amount_in_words = amount_in_words(rupees);
        let e_way_bill_required = is_e_way_bill_required(
            totals.total_amount,
            request.transport_distance_km.unwrap_or(Decimal::ZERO),
        );

        Ok(Invoice::from_parts(InvoiceParts {
            invoice_number,
            sequence,
            period,
            invoice_date: request.invoice_date,
            due_date: request.due_date,
            seller_gstin: parties.seller,
            buyer_name: request.buyer_name.trim().to_string(),
            buyer_gstin: parties.buyer,
            place_of_supply: supply.place_of_supply,
            supply_type: supply.supply_type,
            lines,
            totals,
            amount_in_words,
            e_way_bill_required,
            notes: request.notes,
        }))
    }

    fn validate(request: &InvoiceRequest) -> Result<ValidatedParties> {
        let seller = TaxIdentifier::parse(&request.seller_gstin, "seller_gstin")?;

        if request.buyer_name.trim().is_empty() {
            return Err(AppError::validation("buyer_name", "Buyer name cannot be empty"));
        }

        let buyer = match request.buyer_gstin.as_deref().filter(|g| !g.is_empty()) {
            Some(gstin) => Some(TaxIdentifier::parse(gstin, "buyer_gstin")?),
            None => None,
        };

        let place_of_supply = request
            .place_of_supply
            .as_deref()
            .filter(|p| !p.is_empty());
        if let Some(state) = place_of_supply {
            if !is_known_jurisdiction(state) {
                return Err(AppError::validation(
                    "place_of_supply",
                    format!("'{}' is not a known state code", state),
                ));
            }
        }

        if let Some(due_date) = request.due_date {
            if due_date < request.invoice_date {
                return Err(AppError::validation(
                    "due_date",
                    format!(
                        "Due date {} is before invoice date {}",
                        due_date, request.invoice_date
                    ),
                ));
            }
        }

        if let Some(distance) = request.transport_distance_km {
            if distance < Decimal::ZERO {
                return Err(AppError::validation(
                    "transport_distance_km",
                    format!("Distance must be non-negative, got: {}", distance),
                ));
            }
        }

        if request.items.is_empty() {
            return Err(AppError::validation(
                "items",
                "Invoice must have at least one line item",
            ));
        }

        let mut invoice_value = Decimal::ZERO;
        for (index, item) in request.items.iter().enumerate() {
            item.validate(index)?;
            invoice_value = invoice_value
                .checked_add(item.gross_amount())
                .filter(|value| *value <= max_invoice_value())
                .ok_or_else(|| {
                    AppError::validation(
                        "items",
                        format!(
                            "Invoice value exceeds the maximum of {}",
                            max_invoice_value()
                        ),
                    )
                })?;
        }

        Ok(ValidatedParties {
            seller,
            buyer,
            place_of_supply: place_of_supply.map(str::to_string),
        })
    }

    fn price_items(
        &self,
        request: &InvoiceRequest,
        supply: &ResolvedSupply,
    ) -> Result<(Vec<InvoiceLine>, InvoiceTotals)> {
        let inter_state = supply.supply_type.is_inter_state();
        let mut running = RunningTotals::new();
        let mut lines = Vec::with_capacity(request.items.len());

        for item in &request.items {
            let rate = self
                .rate_catalog
                .lookup_rate(&item.hsn_code)
                .ok_or_else(|| AppError::unknown_classification(item.hsn_code.clone()))?;

            if !rate.is_rate_in_range() {
                return Err(AppError::Configuration(format!(
                    "GST rate {} for {} is outside 0-100",
                    rate.gst_rate, rate.code
                )));
            }

            let taxable_value = item.taxable_value();
            let split = self
                .calculator
                .compute_line_tax(taxable_value, &rate, inter_state);

            let line = InvoiceLine::new(item.clone(), taxable_value, &rate, split, inter_state);
            running.add(&line);
            lines.push(line);
        }

        Ok((lines, running.finish()))
    }
}

fn whole_rupees(totals: &InvoiceTotals) -> Result<u64> {
    totals.total_amount.to_u64().ok_or_else(|| {
        AppError::internal(format!(
            "grand total {} cannot be rendered in words",
            totals.total_amount
        ))
    })
}
