use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every stored monetary amount (paise)
pub const PAISE_SCALE: u32 = 2;

/// Largest value accepted for one line or for a whole invoice before tax
/// (₹10^15). Keeps every tax product and running sum far inside `Decimal`
/// and the rounded grand total inside `u64`.
pub const MAX_INVOICE_VALUE: i64 = 1_000_000_000_000_000;

pub fn max_invoice_value() -> Decimal {
    Decimal::from(MAX_INVOICE_VALUE)
}

/// Rounds to paise, half away from zero.
///
/// Invoices are settled the way a shop counter rounds: 0.005 goes up to 0.01,
/// not to the nearest even digit.
pub fn round_paise(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAISE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole rupee, half away from zero
pub fn round_rupee(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with the rupee sign and Indian digit grouping
/// (`₹12,34,567.80`).
pub fn format_inr(amount: Decimal) -> String {
    let rendered = format!("{:.2}", round_paise(amount).abs());
    let (whole, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}₹{}.{}", sign, group_indian(whole), fraction)
}

// Last three digits form one group, everything before groups in pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
