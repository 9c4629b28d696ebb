// Reports module: GST liability over the invoice register

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{GstLiabilityReport, RateLiability};
pub use services::ReportService;
