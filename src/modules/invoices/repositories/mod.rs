pub mod invoice_repository;
pub mod sequence_store;

pub use invoice_repository::{InMemoryInvoiceRepository, InvoiceRepository};
pub use sequence_store::{InMemorySequenceStore, SequenceStore};
