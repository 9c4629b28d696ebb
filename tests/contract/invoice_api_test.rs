// HTTP contract for the invoice service: status codes and JSON bodies

use std::sync::Arc;

use actix_web::{test, web, App};
use gstinvoice::invoices::{
    InMemoryInvoiceRepository, InMemorySequenceStore, InvoiceAssembler, InvoiceRepository,
    SequenceStore,
};
use gstinvoice::middleware::{json_error_handler, query_error_handler, RequestId};
use gstinvoice::modules::{health, identifiers, invoices, reports, taxes};
use gstinvoice::reports::ReportService;
use gstinvoice::taxes::{InMemoryRateCatalog, RateCatalog};
use rust_decimal::Decimal;
use serde_json::{json, Value};

const SELLER: &str = "27AAAAA0000A1Z5";

macro_rules! test_app {
    ($sequences:expr) => {{
        let catalog: Arc<dyn RateCatalog> = Arc::new(InMemoryRateCatalog::builtin().unwrap());
        let sequences: Arc<dyn SequenceStore> = $sequences;
        let repository: Arc<dyn InvoiceRepository> = Arc::new(InMemoryInvoiceRepository::new());
        let assembler = Arc::new(InvoiceAssembler::new(Arc::clone(&catalog), sequences, "INV"));
        let report_service = Arc::new(ReportService::new(Arc::clone(&repository)));

        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new(catalog))
                .app_data(web::Data::new(repository))
                .app_data(web::Data::new(assembler))
                .app_data(web::Data::new(report_service))
                .configure(invoices::controllers::configure)
                .configure(taxes::controllers::configure_tax_routes)
                .configure(identifiers::controllers::configure)
                .configure(reports::controllers::configure)
                .configure(health::configure),
        )
        .await
    }};
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

fn intra_state_body() -> Value {
    json!({
        "seller_gstin": SELLER,
        "buyer_name": "Pune Traders",
        "buyer_gstin": "27BBBBB1111B1Z2",
        "invoice_date": "2024-03-15",
        "items": [
            { "name": "Laptop", "hsn_code": "8471", "quantity": "1", "unit_price": "1000" }
        ]
    })
}

#[actix_web::test]
async fn test_create_invoice_returns_201() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(intra_state_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 201);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["invoice_number"], "INV/2403/0001");
    assert_eq!(body["supply_type"], "intra_state");
    assert_eq!(body["place_of_supply"], "27");
    assert_eq!(decimal(&body["cgst_total"]), Decimal::from(90));
    assert_eq!(decimal(&body["sgst_total"]), Decimal::from(90));
    assert_eq!(decimal(&body["igst_total"]), Decimal::ZERO);
    assert_eq!(decimal(&body["total_amount"]), Decimal::from(1180));
    assert_eq!(
        body["amount_in_words"],
        "One Thousand One Hundred and Eighty Rupees Only"
    );
    assert_eq!(body["e_way_bill_required"], false);
    assert!(body["id"].is_string());
}

#[actix_web::test]
async fn test_created_invoice_can_be_fetched_and_listed() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(intra_state_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

    let req = test::TestRequest::get()
        .uri("/invoices/INV/2403/0001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["buyer_name"], "Pune Traders");

    let req = test::TestRequest::get()
        .uri("/invoices?from=2024-03-01&to=2024-03-31")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["invoices"][0]["invoice_number"], "INV/2403/0001");

    let req = test::TestRequest::get()
        .uri("/invoices/INV/2403/0002")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_invalid_identifier_is_400_with_field() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let mut body = intra_state_body();
    body["buyer_gstin"] = json!("27BBBBB1111B1Z");

    let req = test::TestRequest::post().uri("/invoices").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "validation_error");
    assert_eq!(body["error"]["field"], "buyer_gstin");
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_oversized_line_is_400_not_500() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let mut body = intra_state_body();
    body["items"][0]["quantity"] = json!("100000000000000000000");
    body["items"][0]["unit_price"] = json!("100000000000000000000");

    let req = test::TestRequest::post().uri("/invoices").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "validation_error");
    assert_eq!(body["error"]["field"], "items[0].quantity");

    // The rejected request left numbering untouched
    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(intra_state_body())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["invoice_number"], "INV/2403/0001");
}

#[actix_web::test]
async fn test_unknown_hsn_code_is_422() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let mut body = intra_state_body();
    body["items"][0]["hsn_code"] = json!("0000");

    let req = test::TestRequest::post().uri("/invoices").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "unknown_classification");
}

#[actix_web::test]
async fn test_missing_items_is_400() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(json!({ "seller_gstin": SELLER, "buyer_name": "Acme" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["field"], "body");
}

#[actix_web::test]
async fn test_exhausted_sequence_is_503() {
    let period = "2403".parse().unwrap();
    let app = test_app!(Arc::new(InMemorySequenceStore::new().with_last(period, u64::MAX)));

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(intra_state_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 503);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["kind"], "sequence_unavailable");
}

#[actix_web::test]
async fn test_identifier_and_tax_lookups() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let req = test::TestRequest::get().uri("/identifiers/27AAAAA0000A1Z5").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["gstin_valid"], true);
    assert_eq!(body["jurisdiction"]["code"], "27");

    let req = test::TestRequest::get().uri("/taxes/8703").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(decimal(&body["gst_rate"]), Decimal::from(28));

    let req = test::TestRequest::get().uri("/health").to_request();
    assert!(test::call_service(&app, req).await.status().is_success());
}

#[actix_web::test]
async fn test_liability_report_after_invoice() {
    let app = test_app!(Arc::new(InMemorySequenceStore::new()));

    let req = test::TestRequest::post()
        .uri("/invoices")
        .set_json(intra_state_body())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 201);

    let req = test::TestRequest::get()
        .uri("/reports/gst-liability?from=2024-03-01&to=2024-03-31&paid=50")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["invoice_count"], 1);
    assert_eq!(decimal(&body["total"]), Decimal::from(180));
    assert_eq!(decimal(&body["pending"]), Decimal::from(130));
    assert_eq!(body["formatted_total"], "₹180.00");
}
