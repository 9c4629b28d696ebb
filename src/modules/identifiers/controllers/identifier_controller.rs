use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::modules::identifiers::models::{state_code, StateCode};
use crate::modules::identifiers::services::{
    jurisdiction_prefix, validate_business_identifier, validate_tax_identifier,
};

/// Result of checking a user-entered identifier
#[derive(Debug, Serialize)]
pub struct IdentifierCheckResponse {
    pub identifier: String,
    pub gstin_valid: bool,
    pub pan_valid: bool,
    /// State named by the prefix, only for a valid GSTIN
    pub jurisdiction: Option<&'static StateCode>,
}

impl IdentifierCheckResponse {
    pub fn check(identifier: String) -> Self {
        let gstin_valid = validate_tax_identifier(&identifier);
        let jurisdiction = if gstin_valid {
            jurisdiction_prefix(&identifier).and_then(state_code)
        } else {
            None
        };

        Self {
            gstin_valid,
            pan_valid: validate_business_identifier(&identifier),
            jurisdiction,
            identifier,
        }
    }
}

/// Validate an identifier
/// GET /identifiers/{code}
///
/// Malformed input is a normal answer here, not an error status.
pub async fn check_identifier(path: web::Path<String>) -> HttpResponse {
    HttpResponse::Ok().json(IdentifierCheckResponse::check(path.into_inner()))
}

/// Configure identifier routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/identifiers").route("/{code}", web::get().to(check_identifier)));
}
