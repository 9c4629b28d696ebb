//! Decides whether a sale is intra-state or inter-state.
//!
//! Precedence:
//! 1. a registered buyer's GSTIN prefix;
//! 2. for an unregistered buyer, the declared place-of-supply state code;
//! 3. otherwise the sale is treated as made at the seller's own state.

use crate::modules::identifiers::models::{state_code, StateCode, TaxIdentifier};
use crate::modules::identifiers::services::jurisdiction_prefix;
use crate::modules::jurisdiction::models::SupplyType;

/// Supply type plus the state code it was decided against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSupply {
    pub supply_type: SupplyType,
    pub place_of_supply: String,
}

/// Compares the seller's state prefix with the buyer's, or with
/// `place_of_supply` when the buyer has no identifier.
pub fn is_inter_state(
    seller_identifier: &str,
    buyer_identifier: Option<&str>,
    place_of_supply: Option<&str>,
) -> bool {
    let seller_state = jurisdiction_prefix(seller_identifier);

    let buyer_state = match buyer_identifier.filter(|b| !b.is_empty()) {
        Some(buyer) => jurisdiction_prefix(buyer),
        None => match place_of_supply.filter(|p| !p.is_empty()) {
            Some(state) => Some(state),
            None => return false,
        },
    };

    seller_state != buyer_state
}

/// Typed variant used by the invoice assembler
pub fn resolve_supply(
    seller: &TaxIdentifier,
    buyer: Option<&TaxIdentifier>,
    place_of_supply: Option<&str>,
) -> ResolvedSupply {
    let place_of_supply = match buyer {
        Some(buyer) => buyer.jurisdiction_code(),
        None => place_of_supply
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| seller.jurisdiction_code()),
    };

    let inter_state = is_inter_state(
        seller.as_str(),
        buyer.map(TaxIdentifier::as_str),
        Some(place_of_supply),
    );

    ResolvedSupply {
        supply_type: SupplyType::from_inter_state(inter_state),
        place_of_supply: place_of_supply.to_string(),
    }
}

/// State-table row for a two-digit code
pub fn jurisdiction(code: &str) -> Option<&'static StateCode> {
    state_code(code)
}

pub fn is_known_jurisdiction(code: &str) -> bool {
    jurisdiction(code).is_some()
}
