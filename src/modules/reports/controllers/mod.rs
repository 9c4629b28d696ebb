mod report_controller;

pub use report_controller::{get_gst_liability, GstLiabilityQuery};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    report_controller::configure(cfg);
}
