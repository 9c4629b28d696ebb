mod invoice;
mod invoice_number;
mod line_item;
mod request;

pub use invoice::{Invoice, InvoiceParts, InvoiceTotals, RunningTotals};
pub use invoice_number::InvoiceNumber;
pub use line_item::{InvoiceLine, InvoiceLineItem};
pub use request::{CreateInvoiceRequest, InvoiceRequest};
