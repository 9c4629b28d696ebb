use serde::{Deserialize, Serialize};

/// Which tax branch a transaction falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    /// Seller and place of supply share a state: CGST + SGST
    IntraState,
    /// Different states: IGST
    InterState,
}

impl SupplyType {
    pub fn from_inter_state(is_inter_state: bool) -> Self {
        if is_inter_state {
            SupplyType::InterState
        } else {
            SupplyType::IntraState
        }
    }

    pub fn is_inter_state(&self) -> bool {
        matches!(self, SupplyType::InterState)
    }
}

impl std::fmt::Display for SupplyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplyType::IntraState => write!(f, "intra_state"),
            SupplyType::InterState => write!(f, "inter_state"),
        }
    }
}
