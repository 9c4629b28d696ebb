//! Tax controller for HTTP endpoints
//!
//! Read-only view of the rate catalog the invoice engine taxes against.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::taxes::repositories::RateCatalog;

/// List all catalog rates
///
/// GET /taxes
pub async fn list_rates(catalog: web::Data<Arc<dyn RateCatalog>>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "rates": catalog.list_rates(),
    }))
}

/// Get the rate for one classification code
///
/// GET /taxes/{code}
pub async fn get_rate(
    catalog: web::Data<Arc<dyn RateCatalog>>,
    code: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = code.into_inner();

    match catalog.lookup_rate(&code) {
        Some(rate) => Ok(HttpResponse::Ok().json(rate)),
        None => Err(AppError::unknown_classification(code)),
    }
}

/// Configure tax routes
pub fn configure_tax_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("", web::get().to(list_rates))
            .route("/{code}", web::get().to(get_rate)),
    );
}
