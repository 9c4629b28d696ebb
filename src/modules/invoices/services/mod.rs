pub mod amount_in_words;
pub mod e_way_bill;
pub mod invoice_assembler;

pub use amount_in_words::amount_in_words;
pub use e_way_bill::is_e_way_bill_required;
pub use invoice_assembler::InvoiceAssembler;
