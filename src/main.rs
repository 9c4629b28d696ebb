use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gstinvoice::config::{Config, LogFormat};
use gstinvoice::invoices::{
    InMemoryInvoiceRepository, InMemorySequenceStore, InvoiceAssembler, InvoiceRepository,
    SequenceStore,
};
use gstinvoice::middleware::{json_error_handler, query_error_handler, RequestId};
use gstinvoice::modules::{health, identifiers, invoices, reports, taxes};
use gstinvoice::reports::ReportService;
use gstinvoice::taxes::{InMemoryRateCatalog, RateCatalog};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gstinvoice=debug,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn load_catalog(config: &Config) -> anyhow::Result<InMemoryRateCatalog> {
    match &config.app.rate_catalog_path {
        Some(path) => InMemoryRateCatalog::from_yaml_file(path)
            .with_context(|| format!("Failed to load rate catalog from {}", path.display())),
        None => InMemoryRateCatalog::builtin().context("Failed to load built-in rate catalog"),
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.log_format);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting GST Invoice Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let catalog = load_catalog(&config)?;
    tracing::info!("Rate catalog loaded ({} classification codes)", catalog.len());

    let catalog: Arc<dyn RateCatalog> = Arc::new(catalog);
    let sequences: Arc<dyn SequenceStore> = Arc::new(InMemorySequenceStore::new());
    let repository: Arc<dyn InvoiceRepository> = Arc::new(InMemoryInvoiceRepository::new());

    let assembler = Arc::new(InvoiceAssembler::new(
        Arc::clone(&catalog),
        sequences,
        config.app.invoice_prefix.clone(),
    ));
    let report_service = Arc::new(ReportService::new(Arc::clone(&repository)));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(web::Data::new(Arc::clone(&catalog)))
            .app_data(web::Data::new(Arc::clone(&repository)))
            .app_data(web::Data::new(Arc::clone(&assembler)))
            .app_data(web::Data::new(Arc::clone(&report_service)))
            .configure(invoices::controllers::configure)
            .configure(taxes::controllers::configure_tax_routes)
            .configure(identifiers::controllers::configure)
            .configure(reports::controllers::configure)
            .configure(health::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
