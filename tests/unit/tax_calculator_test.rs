// Property-based tests for the per-line GST split and invoice rounding
//
// - Intra-state: CGST == SGST, IGST == 0, CGST + SGST within one paisa of
//   taxable × rate / 100
// - Inter-state: IGST == round2(taxable × rate / 100), CGST == SGST == 0
// - Line total is taxable value plus every component
// - Rounded grand total == pre-round total + adjustment, |adjustment| < 1

use gstinvoice::core::money::round_paise;
use gstinvoice::invoices::models::{InvoiceLine, InvoiceLineItem, RunningTotals};
use gstinvoice::taxes::{compute_line_tax, TaxCalculator, TaxRateSpec};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;

const RATES: [&str; 8] = ["0", "0.25", "3", "5", "12", "18", "28", "40"];

fn rate(percent: &str) -> TaxRateSpec {
    TaxRateSpec::new("0000", "Test", Decimal::from_str(percent).unwrap())
}

fn paise(amount: u64) -> Decimal {
    Decimal::new(amount as i64, 2)
}

#[test]
fn test_known_split_intra_state() {
    let split = compute_line_tax(dec!(1000), &rate("18"), false);
    assert_eq!(split.cgst, dec!(90));
    assert_eq!(split.sgst, dec!(90));
    assert_eq!(split.igst, Decimal::ZERO);
    assert_eq!(split.total, dec!(1180));
}

#[test]
fn test_known_split_inter_state() {
    let split = TaxCalculator::new().compute_line_tax(dec!(1000), &rate("18"), true);
    assert_eq!(split.cgst, Decimal::ZERO);
    assert_eq!(split.sgst, Decimal::ZERO);
    assert_eq!(split.igst, dec!(180));
    assert_eq!(split.total, dec!(1180));
}

#[test]
fn test_half_paisa_rounds_away_from_zero() {
    // 0.10 × 5% = 0.005
    let split = compute_line_tax(dec!(0.10), &rate("5"), true);
    assert_eq!(split.igst, dec!(0.01));
}

#[test]
fn test_odd_rate_split_is_even() {
    // 3% on 333.33: each half is 1.5% = 4.99995 → 5.00
    let split = compute_line_tax(dec!(333.33), &rate("3"), false);
    assert_eq!(split.cgst, dec!(5.00));
    assert_eq!(split.cgst, split.sgst);
}

#[test]
fn test_zero_taxable_value() {
    let split = compute_line_tax(Decimal::ZERO, &rate("28"), false);
    assert_eq!(split.tax_amount(), Decimal::ZERO);
    assert_eq!(split.total, Decimal::ZERO);
}

proptest! {
    #[test]
    fn prop_intra_state_halves_are_equal(
        amount in 0u64..10_000_000_000u64,
        rate_index in 0usize..RATES.len(),
    ) {
        let taxable = paise(amount);
        let spec = rate(RATES[rate_index]);
        let split = compute_line_tax(taxable, &spec, false);

        prop_assert_eq!(split.cgst, split.sgst);
        prop_assert_eq!(split.igst, Decimal::ZERO);

        let exact = taxable * spec.gst_rate / Decimal::ONE_HUNDRED;
        let drift = (split.cgst + split.sgst - exact).abs();
        prop_assert!(drift <= dec!(0.01), "drift {} for {} @ {}", drift, taxable, spec.gst_rate);
    }

    #[test]
    fn prop_inter_state_is_single_component(
        amount in 0u64..10_000_000_000u64,
        rate_index in 0usize..RATES.len(),
    ) {
        let taxable = paise(amount);
        let spec = rate(RATES[rate_index]);
        let split = compute_line_tax(taxable, &spec, true);

        prop_assert_eq!(split.cgst, Decimal::ZERO);
        prop_assert_eq!(split.sgst, Decimal::ZERO);
        prop_assert_eq!(
            split.igst,
            round_paise(taxable * spec.gst_rate / Decimal::ONE_HUNDRED)
        );
    }

    #[test]
    fn prop_line_total_is_taxable_plus_tax(
        amount in 0u64..10_000_000_000u64,
        rate_index in 0usize..RATES.len(),
        inter_state in any::<bool>(),
    ) {
        let taxable = paise(amount);
        let split = compute_line_tax(taxable, &rate(RATES[rate_index]), inter_state);

        prop_assert_eq!(split.total, taxable + split.tax_amount());
        prop_assert!(split.tax_amount() >= Decimal::ZERO);
        prop_assert!(split.cgst.scale() <= 2 && split.igst.scale() <= 2);
    }

    #[test]
    fn prop_split_is_deterministic(
        amount in 0u64..10_000_000_000u64,
        rate_index in 0usize..RATES.len(),
        inter_state in any::<bool>(),
    ) {
        let taxable = paise(amount);
        let spec = rate(RATES[rate_index]);

        prop_assert_eq!(
            compute_line_tax(taxable, &spec, inter_state),
            compute_line_tax(taxable, &spec, inter_state)
        );
    }

    #[test]
    fn prop_grand_total_adjustment_reconciles(
        lines in prop::collection::vec((1u64..10_000_000u64, 0usize..RATES.len()), 1..8),
        inter_state in any::<bool>(),
    ) {
        let mut running = RunningTotals::new();

        for (amount, rate_index) in lines {
            let spec = rate(RATES[rate_index]);
            let item = InvoiceLineItem::new("Item", "0000", Decimal::ONE, paise(amount));
            let taxable = item.taxable_value();
            let split = compute_line_tax(taxable, &spec, inter_state);
            running.add(&InvoiceLine::new(item, taxable, &spec, split, inter_state));
        }

        let totals = running.finish();

        prop_assert_eq!(totals.pre_round_total + totals.round_off, totals.total_amount);
        prop_assert!(totals.round_off.abs() < Decimal::ONE);
        prop_assert_eq!(totals.total_amount.fract(), Decimal::ZERO);
        prop_assert_eq!(
            totals.pre_round_total,
            totals.sub_total + totals.tax_total()
        );
    }
}
