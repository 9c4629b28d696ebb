pub mod health;
pub mod identifiers;
pub mod invoices;
pub mod jurisdiction;
pub mod reports;
pub mod taxes;
