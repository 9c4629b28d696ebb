// Taxes module: rate catalog and per-line GST split

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TaxRateSpec, TaxSplit};
pub use repositories::{InMemoryRateCatalog, RateCatalog};
pub use services::{compute_line_tax, TaxCalculator};
