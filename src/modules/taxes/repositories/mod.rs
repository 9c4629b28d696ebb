pub mod rate_catalog;

pub use rate_catalog::{InMemoryRateCatalog, RateCatalog};
