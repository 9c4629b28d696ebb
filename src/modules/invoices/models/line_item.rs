// Line items
//
// A requested line is quantity × unit price less a discount, taxed at the rate
// of its HSN code. The taxable value is rounded to paise before any tax is
// computed on it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{max_invoice_value, round_paise};
use crate::core::{AppError, Result};
use crate::modules::taxes::models::{TaxRateSpec, TaxSplit};

fn default_unit() -> String {
    "NOS".to_string()
}

/// A line as submitted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Product or service name
    #[serde(default)]
    pub name: String,

    /// HSN/SAC classification code; must exist in the rate catalog
    pub hsn_code: String,

    /// Quantity, may be fractional (e.g. 2.5 kg)
    pub quantity: Decimal,

    /// Unit of measure
    #[serde(default = "default_unit")]
    pub unit: String,

    /// Price per unit before tax
    pub unit_price: Decimal,

    /// Flat discount for the whole line
    #[serde(default)]
    pub discount: Decimal,
}

impl InvoiceLineItem {
    pub fn new(
        name: impl Into<String>,
        hsn_code: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            hsn_code: hsn_code.into(),
            quantity,
            unit: default_unit(),
            unit_price,
            discount: Decimal::ZERO,
        }
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// quantity × unit price, unrounded; only call after `validate`
    pub fn gross_amount(&self) -> Decimal {
        self.quantity * self.unit_price
    }

    /// Formula: round2(quantity × unit_price − discount)
    pub fn taxable_value(&self) -> Decimal {
        round_paise(self.gross_amount() - self.discount)
    }

    /// Checks the line, naming the failing field as `items[{index}].{field}`
    pub fn validate(&self, index: usize) -> Result<()> {
        let field = |name: &str| format!("items[{}].{}", index, name);

        if self.hsn_code.trim().is_empty() {
            return Err(AppError::validation(
                field("hsn_code"),
                "HSN code cannot be empty",
            ));
        }

        if self.quantity <= Decimal::ZERO {
            return Err(AppError::validation(
                field("quantity"),
                format!("Quantity must be positive, got: {}", self.quantity),
            ));
        }

        if self.unit_price < Decimal::ZERO {
            return Err(AppError::validation(
                field("unit_price"),
                format!("Unit price must be non-negative, got: {}", self.unit_price),
            ));
        }

        let gross = self.quantity.checked_mul(self.unit_price).ok_or_else(|| {
            AppError::validation(
                field("quantity"),
                format!(
                    "Line amount {} × {} is too large",
                    self.quantity, self.unit_price
                ),
            )
        })?;

        if gross > max_invoice_value() {
            return Err(AppError::validation(
                field("quantity"),
                format!(
                    "Line amount {} exceeds the maximum of {}",
                    gross,
                    max_invoice_value()
                ),
            ));
        }

        if self.discount < Decimal::ZERO {
            return Err(AppError::validation(
                field("discount"),
                format!("Discount must be non-negative, got: {}", self.discount),
            ));
        }

        if self.discount > gross {
            return Err(AppError::validation(
                field("discount"),
                format!("Discount {} exceeds line amount {}", self.discount, gross),
            ));
        }

        Ok(())
    }
}

/// A priced line on a finished invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    #[serde(flatten)]
    pub item: InvoiceLineItem,

    pub taxable_value: Decimal,

    /// Rates in force when the invoice was built
    pub gst_rate: Decimal,
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    pub igst_rate: Decimal,

    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,

    /// Taxable value plus tax
    pub total_amount: Decimal,
}

impl InvoiceLine {
    /// Rates shown on the line follow the branch actually charged
    pub fn new(
        item: InvoiceLineItem,
        taxable_value: Decimal,
        rate: &TaxRateSpec,
        split: TaxSplit,
        is_inter_state: bool,
    ) -> Self {
        let (cgst_rate, sgst_rate, igst_rate) = if is_inter_state {
            (Decimal::ZERO, Decimal::ZERO, rate.gst_rate)
        } else {
            (rate.local_rate(), rate.local_rate(), Decimal::ZERO)
        };

        Self {
            item,
            taxable_value,
            gst_rate: rate.gst_rate,
            cgst_rate,
            sgst_rate,
            igst_rate,
            cgst_amount: split.cgst,
            sgst_amount: split.sgst,
            igst_amount: split.igst,
            total_amount: split.total,
        }
    }

    pub fn tax_amount(&self) -> Decimal {
        self.cgst_amount + self.sgst_amount + self.igst_amount
    }
}
