pub mod identifier_validator;

pub use identifier_validator::{
    jurisdiction_prefix, validate_business_identifier, validate_tax_identifier,
};
