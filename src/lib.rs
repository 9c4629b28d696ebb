//! GST Invoice Engine Library
//!
//! Validates GSTIN/PAN identifiers, decides intra- vs inter-state supply,
//! splits GST per line and assembles numbered, rounded tax invoices.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{AppError, PeriodKey, Result};
pub use modules::identifiers;
pub use modules::invoices;
pub use modules::jurisdiction;
pub use modules::reports;
pub use modules::taxes;

pub use invoices::{InvoiceAssembler, InvoiceRequest};
