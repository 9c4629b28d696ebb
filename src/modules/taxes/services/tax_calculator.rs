use rust_decimal::Decimal;

use crate::core::money::round_paise;
use crate::modules::taxes::models::{TaxRateSpec, TaxSplit};

/// TaxCalculator splits a line's GST into CGST/SGST or IGST
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the tax split for one line item
    ///
    /// Inter-state: IGST = taxable × rate / 100.
    /// Intra-state: CGST = SGST = taxable × rate / 200.
    /// Each component is rounded to paise on its own before the line total is
    /// formed, so invoice totals reconcile with the printed line amounts.
    ///
    /// Never fails; a zero or negative taxable value yields zero or negative tax.
    pub fn compute_line_tax(
        &self,
        taxable_value: Decimal,
        rate: &TaxRateSpec,
        is_inter_state: bool,
    ) -> TaxSplit {
        compute_line_tax(taxable_value, rate, is_inter_state)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-function form of [`TaxCalculator::compute_line_tax`]
pub fn compute_line_tax(taxable_value: Decimal, rate: &TaxRateSpec, is_inter_state: bool) -> TaxSplit {
    let (cgst, sgst, igst) = if is_inter_state {
        let igst = round_paise(taxable_value * rate.gst_rate / Decimal::ONE_HUNDRED);
        (Decimal::ZERO, Decimal::ZERO, igst)
    } else {
        let local = round_paise(taxable_value * rate.local_rate() / Decimal::ONE_HUNDRED);
        (local, local, Decimal::ZERO)
    };

    TaxSplit {
        cgst,
        sgst,
        igst,
        total: taxable_value + cgst + sgst + igst,
    }
}
