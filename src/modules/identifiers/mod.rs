// Identifiers module: GSTIN and PAN format validation

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{StateCode, TaxIdentifier};
pub use services::{validate_business_identifier, validate_tax_identifier};
