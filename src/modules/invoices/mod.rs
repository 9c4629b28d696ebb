// Invoices module: assembly, numbering and the invoice register

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateInvoiceRequest, Invoice, InvoiceLine, InvoiceLineItem, InvoiceRequest};
pub use repositories::{
    InMemoryInvoiceRepository, InMemorySequenceStore, InvoiceRepository, SequenceStore,
};
pub use services::InvoiceAssembler;
