use serde::Serialize;
use std::fmt;

use crate::core::PeriodKey;

/// Human-readable invoice number, `{PREFIX}/{YYMM}/{NNNN}`.
///
/// The sequence is zero-padded to four digits and simply grows wider once a
/// period issues more than 9999 invoices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    pub fn new(prefix: &str, period: &PeriodKey, sequence: u64) -> Self {
        Self(format!("{}/{}/{:04}", prefix, period, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
