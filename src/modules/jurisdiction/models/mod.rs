pub mod supply_type;

pub use supply_type::SupplyType;
