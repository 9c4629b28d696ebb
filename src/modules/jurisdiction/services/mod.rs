pub mod jurisdiction_resolver;

pub use jurisdiction_resolver::{
    is_inter_state, is_known_jurisdiction, jurisdiction, resolve_supply, ResolvedSupply,
};
