use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate catalog entry for one HSN/SAC classification code.
///
/// Rates are percentages (`18` means 18%). Only `gst_rate` drives the
/// computation; the stored component rates are carried for display and
/// checked for consistency when the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRateSpec {
    /// HSN/SAC classification code
    pub code: String,

    #[serde(default)]
    pub description: String,

    /// Combined GST rate
    pub gst_rate: Decimal,

    /// Central share for intra-state supplies
    pub cgst_rate: Decimal,

    /// State share for intra-state supplies
    pub sgst_rate: Decimal,

    /// Integrated rate for inter-state supplies
    pub igst_rate: Decimal,

    /// Compensation cess; informational only, not applied
    #[serde(default)]
    pub cess_rate: Decimal,
}

impl TaxRateSpec {
    /// Builds a spec with the component rates split from the combined rate
    pub fn new(code: impl Into<String>, description: impl Into<String>, gst_rate: Decimal) -> Self {
        let half = gst_rate / Decimal::TWO;
        Self {
            code: code.into(),
            description: description.into(),
            gst_rate,
            cgst_rate: half,
            sgst_rate: half,
            igst_rate: gst_rate,
            cess_rate: Decimal::ZERO,
        }
    }

    /// Rate applied to each of CGST and SGST
    pub fn local_rate(&self) -> Decimal {
        self.gst_rate / Decimal::TWO
    }

    /// Whether the combined rate is a percentage between 0 and 100
    pub fn is_rate_in_range(&self) -> bool {
        self.gst_rate >= Decimal::ZERO && self.gst_rate <= Decimal::ONE_HUNDRED
    }

    /// Whether the stored components agree with the combined rate
    pub fn is_consistent(&self) -> bool {
        self.cgst_rate + self.sgst_rate == self.gst_rate
            && self.cgst_rate == self.sgst_rate
            && self.igst_rate == self.gst_rate
    }
}

/// Tax on one line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxSplit {
    /// Central GST (first local component)
    pub cgst: Decimal,
    /// State GST (second local component)
    pub sgst: Decimal,
    /// Integrated GST (remote component)
    pub igst: Decimal,
    /// Taxable value plus all components
    pub total: Decimal,
}

impl TaxSplit {
    pub fn tax_amount(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}
