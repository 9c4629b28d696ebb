use rust_decimal::Decimal;

/// Consignment value above which an e-way bill is needed
pub const E_WAY_BILL_VALUE_THRESHOLD: i64 = 50_000;

/// Transport distance in km above which an e-way bill is needed
pub const E_WAY_BILL_DISTANCE_THRESHOLD_KM: i64 = 50;

/// Whether moving goods of this value over this distance needs an e-way bill
pub fn is_e_way_bill_required(invoice_value: Decimal, distance_km: Decimal) -> bool {
    invoice_value > Decimal::from(E_WAY_BILL_VALUE_THRESHOLD)
        || distance_km > Decimal::from(E_WAY_BILL_DISTANCE_THRESHOLD_KM)
}
