pub mod tax;

pub use tax::{TaxRateSpec, TaxSplit};
