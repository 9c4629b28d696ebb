// Jurisdiction module: intra-state vs inter-state resolution

pub mod models;
pub mod services;

pub use models::SupplyType;
pub use services::{is_inter_state, resolve_supply};
