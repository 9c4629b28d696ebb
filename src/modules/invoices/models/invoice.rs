// Invoice record
//
// An invoice is built once by the assembler and never mutated afterwards;
// a correction is a new invoice. Fields are private and read through getters.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::invoice_number::InvoiceNumber;
use super::line_item::InvoiceLine;
use crate::core::money::{round_paise, round_rupee};
use crate::core::PeriodKey;
use crate::modules::identifiers::models::TaxIdentifier;
use crate::modules::jurisdiction::models::SupplyType;

/// Summed amounts of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceTotals {
    /// Sum of taxable values
    pub sub_total: Decimal,
    pub cgst_total: Decimal,
    pub sgst_total: Decimal,
    pub igst_total: Decimal,
    /// Sum of line totals before rounding to whole rupees
    pub pre_round_total: Decimal,
    /// total_amount − pre_round_total, always within (−1, 1)
    pub round_off: Decimal,
    /// Grand total in whole rupees
    pub total_amount: Decimal,
}

impl InvoiceTotals {
    pub fn tax_total(&self) -> Decimal {
        self.cgst_total + self.sgst_total + self.igst_total
    }
}

/// Running sums while lines are priced
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningTotals {
    sub_total: Decimal,
    cgst_total: Decimal,
    sgst_total: Decimal,
    igst_total: Decimal,
    pre_round_total: Decimal,
}

impl RunningTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: &InvoiceLine) {
        self.sub_total += line.taxable_value;
        self.cgst_total += line.cgst_amount;
        self.sgst_total += line.sgst_amount;
        self.igst_total += line.igst_amount;
        self.pre_round_total += line.total_amount;
    }

    pub fn pre_round_total(&self) -> Decimal {
        round_paise(self.pre_round_total)
    }

    /// Rounds the grand total to the nearest rupee and records the adjustment
    pub fn finish(self) -> InvoiceTotals {
        let pre_round_total = self.pre_round_total();
        let total_amount = round_rupee(pre_round_total);

        InvoiceTotals {
            sub_total: round_paise(self.sub_total),
            cgst_total: round_paise(self.cgst_total),
            sgst_total: round_paise(self.sgst_total),
            igst_total: round_paise(self.igst_total),
            pre_round_total,
            round_off: total_amount - pre_round_total,
            total_amount,
        }
    }
}

/// Everything the assembler has worked out, handed over in one piece
#[derive(Debug, Clone)]
pub struct InvoiceParts {
    pub invoice_number: InvoiceNumber,
    pub sequence: u64,
    pub period: PeriodKey,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub seller_gstin: TaxIdentifier,
    pub buyer_name: String,
    pub buyer_gstin: Option<TaxIdentifier>,
    pub place_of_supply: String,
    pub supply_type: SupplyType,
    pub lines: Vec<InvoiceLine>,
    pub totals: InvoiceTotals,
    pub amount_in_words: String,
    pub e_way_bill_required: bool,
    pub notes: Option<String>,
}

/// A finalized tax invoice
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    id: Uuid,
    invoice_number: InvoiceNumber,
    sequence: u64,
    period: PeriodKey,
    invoice_date: NaiveDate,
    due_date: Option<NaiveDate>,
    seller_gstin: TaxIdentifier,
    buyer_name: String,
    buyer_gstin: Option<TaxIdentifier>,
    place_of_supply: String,
    supply_type: SupplyType,
    items: Vec<InvoiceLine>,
    #[serde(flatten)]
    totals: InvoiceTotals,
    amount_in_words: String,
    e_way_bill_required: bool,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl Invoice {
    pub(crate) fn from_parts(parts: InvoiceParts) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number: parts.invoice_number,
            sequence: parts.sequence,
            period: parts.period,
            invoice_date: parts.invoice_date,
            due_date: parts.due_date,
            seller_gstin: parts.seller_gstin,
            buyer_name: parts.buyer_name,
            buyer_gstin: parts.buyer_gstin,
            place_of_supply: parts.place_of_supply,
            supply_type: parts.supply_type,
            items: parts.lines,
            totals: parts.totals,
            amount_in_words: parts.amount_in_words,
            e_way_bill_required: parts.e_way_bill_required,
            notes: parts.notes,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn invoice_number(&self) -> &InvoiceNumber {
        &self.invoice_number
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn period(&self) -> &PeriodKey {
        &self.period
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn seller_gstin(&self) -> &TaxIdentifier {
        &self.seller_gstin
    }

    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    pub fn buyer_gstin(&self) -> Option<&TaxIdentifier> {
        self.buyer_gstin.as_ref()
    }

    pub fn place_of_supply(&self) -> &str {
        &self.place_of_supply
    }

    pub fn supply_type(&self) -> SupplyType {
        self.supply_type
    }

    pub fn is_inter_state(&self) -> bool {
        self.supply_type.is_inter_state()
    }

    pub fn items(&self) -> &[InvoiceLine] {
        &self.items
    }

    pub fn totals(&self) -> &InvoiceTotals {
        &self.totals
    }

    pub fn sub_total(&self) -> Decimal {
        self.totals.sub_total
    }

    pub fn cgst_total(&self) -> Decimal {
        self.totals.cgst_total
    }

    pub fn sgst_total(&self) -> Decimal {
        self.totals.sgst_total
    }

    pub fn igst_total(&self) -> Decimal {
        self.totals.igst_total
    }

    pub fn pre_round_total(&self) -> Decimal {
        self.totals.pre_round_total
    }

    pub fn round_off(&self) -> Decimal {
        self.totals.round_off
    }

    pub fn total_amount(&self) -> Decimal {
        self.totals.total_amount
    }

    pub fn amount_in_words(&self) -> &str {
        &self.amount_in_words
    }

    pub fn e_way_bill_required(&self) -> bool {
        self.e_way_bill_required
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
