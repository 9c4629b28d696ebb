pub mod gst_liability;

pub use gst_liability::{GstLiabilityReport, RateLiability};
