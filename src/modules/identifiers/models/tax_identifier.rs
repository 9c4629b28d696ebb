use serde::{Serialize, Serializer};
use std::fmt;

use super::state_code::{state_code, StateCode};
use crate::core::{AppError, Result};
use crate::modules::identifiers::services::identifier_validator::validate_tax_identifier;

/// A GSTIN that has passed format validation.
///
/// Only `parse` builds one, so holding a `TaxIdentifier` means the value is
/// well-formed and its state prefix is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxIdentifier(String);

impl TaxIdentifier {
    /// Validates `code`, reporting a failure against `field`
    pub fn parse(code: &str, field: &str) -> Result<Self> {
        if code.is_empty() {
            return Err(AppError::validation(field, "GSTIN is required"));
        }

        if !validate_tax_identifier(code) {
            return Err(AppError::validation(
                field,
                format!("'{}' is not a valid GSTIN", code),
            ));
        }

        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code
    pub fn jurisdiction_code(&self) -> &str {
        &self.0[..2]
    }

    /// State-table row for the prefix
    pub fn jurisdiction(&self) -> Option<&'static StateCode> {
        state_code(self.jurisdiction_code())
    }

    /// The PAN embedded at positions 3-12
    pub fn pan(&self) -> &str {
        &self.0[2..12]
    }
}

impl fmt::Display for TaxIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TaxIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
