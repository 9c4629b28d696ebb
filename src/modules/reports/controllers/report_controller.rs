use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::core::{AppError, Result};
use crate::modules::reports::models::GstLiabilityReport;
use crate::modules::reports::services::ReportService;

/// Query parameters for the GST liability endpoint
///
/// Either `financial_year` (e.g. `2024-25`) or both `from` and `to`.
#[derive(Debug, Deserialize)]
pub struct GstLiabilityQuery {
    #[serde(default)]
    pub financial_year: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Tax already paid for the period
    #[serde(default)]
    pub paid: Decimal,
}

fn build_report(service: &ReportService, query: &GstLiabilityQuery) -> Result<GstLiabilityReport> {
    match (&query.financial_year, query.from, query.to) {
        (Some(label), None, None) => service.gst_liability_for_year(label, query.paid),
        (None, Some(from), Some(to)) => service.gst_liability(from, to, query.paid),
        (Some(_), _, _) => Err(AppError::validation(
            "financial_year",
            "Use either financial_year or from/to, not both",
        )),
        (None, None, _) => Err(AppError::validation(
            "from",
            "Either financial_year or from/to is required",
        )),
        (None, Some(_), None) => Err(AppError::validation("to", "End date is required")),
    }
}

/// GET /reports/gst-liability
pub async fn get_gst_liability(
    service: web::Data<Arc<ReportService>>,
    query: web::Query<GstLiabilityQuery>,
) -> std::result::Result<HttpResponse, AppError> {
    match build_report(service.get_ref(), &query) {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(e) => {
            warn!(kind = e.kind(), "Failed to build GST liability report: {}", e);
            Err(e)
        }
    }
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports").route("/gst-liability", web::get().to(get_gst_liability)),
    );
}
