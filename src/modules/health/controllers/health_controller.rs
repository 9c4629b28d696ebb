use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::taxes::repositories::RateCatalog;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    /// Number of classification codes loaded
    pub rate_catalog: usize,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub rate_catalog: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
pub async fn health_check(catalog: web::Data<Arc<dyn RateCatalog>>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            rate_catalog: catalog.list_rates().len(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
///
/// Without any rates every invoice would be rejected, so an empty catalog
/// means not ready.
pub async fn readiness_check(catalog: web::Data<Arc<dyn RateCatalog>>) -> impl Responder {
    let checks = ReadinessChecks {
        rate_catalog: !catalog.list_rates().is_empty(),
        application: true,
    };
    let ready = checks.rate_catalog && checks.application;

    if !ready {
        tracing::error!("Readiness check failed: rate catalog is empty");
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// GET /
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "GST Invoice Service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check))
        .route("/", web::get().to(index));
}
