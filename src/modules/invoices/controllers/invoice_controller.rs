use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::money::format_inr;
use crate::core::period::{financial_year, financial_year_bounds, today_in_india};
use crate::modules::invoices::models::{CreateInvoiceRequest, Invoice, InvoiceRequest};
use crate::modules::invoices::repositories::InvoiceRepository;
use crate::modules::invoices::services::InvoiceAssembler;

/// Query parameters for listing invoices
///
/// Both bounds are inclusive. `from` defaults to the start of the current
/// financial year and `to` to today (IST).
#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl ListInvoicesQuery {
    fn range(&self) -> Result<(NaiveDate, NaiveDate), AppError> {
        let today = today_in_india();
        let from = match self.from {
            Some(from) => from,
            None => financial_year_bounds(&financial_year(today))?.0,
        };
        let to = self.to.unwrap_or(today);

        if from > to {
            return Err(AppError::validation(
                "from",
                format!("Start date {} is after end date {}", from, to),
            ));
        }

        Ok((from, to))
    }
}

fn log_rejection(err: &AppError) {
    if matches!(
        err,
        AppError::Validation { .. } | AppError::UnknownClassification(_)
    ) {
        tracing::warn!(kind = err.kind(), field = ?err.field(), "Invoice rejected: {}", err);
    } else {
        tracing::error!(
            kind = err.kind(),
            retryable = err.is_retryable(),
            "Invoice creation failed: {}",
            err
        );
    }
}

/// Create a new invoice
/// POST /invoices
pub async fn create_invoice(
    assembler: web::Data<Arc<InvoiceAssembler>>,
    repository: web::Data<Arc<dyn InvoiceRepository>>,
    request: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let request = InvoiceRequest::from(request.into_inner());
    let assembler = Arc::clone(assembler.get_ref());
    let repository = Arc::clone(repository.get_ref());

    let outcome = web::block(move || -> Result<Invoice, AppError> {
        let invoice = assembler.create_invoice(request)?;
        repository.save(invoice.clone())?;
        Ok(invoice)
    })
    .await
    .map_err(|e| AppError::internal(format!("Invoice worker failed: {}", e)))?;

    match outcome {
        Ok(invoice) => {
            tracing::info!(
                invoice_number = %invoice.invoice_number(),
                supply_type = %invoice.supply_type(),
                total = %format_inr(invoice.total_amount()),
                "Invoice created"
            );
            Ok(HttpResponse::Created().json(invoice))
        }
        Err(err) => {
            log_rejection(&err);
            Err(err)
        }
    }
}

/// Get invoice by its number
/// GET /invoices/{number}
///
/// Invoice numbers contain slashes, so the route uses a tail match and
/// accepts both raw and percent-encoded forms.
pub async fn get_invoice(
    repository: web::Data<Arc<dyn InvoiceRepository>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let number = path.into_inner().replace("%2F", "/").replace("%2f", "/");

    match repository.find_by_number(&number)? {
        Some(invoice) => Ok(HttpResponse::Ok().json(invoice)),
        None => Err(AppError::not_found(format!("Invoice {}", number))),
    }
}

/// List invoices dated within a range
/// GET /invoices?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn list_invoices(
    repository: web::Data<Arc<dyn InvoiceRepository>>,
    query: web::Query<ListInvoicesQuery>,
) -> Result<HttpResponse, AppError> {
    let (from, to) = query.range()?;
    let invoices = repository.list_between(from, to)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "from": from,
        "to": to,
        "count": invoices.len(),
        "invoices": invoices,
    })))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .route("", web::post().to(create_invoice))
            .route("", web::get().to(list_invoices))
            .route("/{number:.*}", web::get().to(get_invoice)),
    );
}
