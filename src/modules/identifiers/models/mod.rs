pub mod state_code;
pub mod tax_identifier;

pub use state_code::{state_code, StateCode, STATE_CODES};
pub use tax_identifier::TaxIdentifier;
