// GSTIN / PAN format validation and jurisdiction lookups through the public API

use gstinvoice::identifiers::models::{state_code, TaxIdentifier, STATE_CODES};
use gstinvoice::identifiers::services::jurisdiction_prefix;
use gstinvoice::identifiers::{validate_business_identifier, validate_tax_identifier};
use gstinvoice::jurisdiction::{is_inter_state, resolve_supply, SupplyType};
use proptest::prelude::*;

#[test]
fn test_reference_gstin() {
    assert!(validate_tax_identifier("27AAAAA0000A1Z5"));
    assert_eq!(jurisdiction_prefix("27AAAAA0000A1Z5"), Some("27"));
    assert_eq!(state_code("27").map(|s| s.name), Some("Maharashtra"));
}

#[test]
fn test_malformed_gstins_are_rejected() {
    let cases = [
        "",
        "27AAAAA0000A1Z",   // 14 characters
        "27AAAAA0000A1Z55", // 16 characters
        "27aaaaa0000a1z5",  // lower case
        "27AAAAA0000A1Y5",  // 14th character must be Z
        "2XAAAAA0000A1Z5",  // non-numeric state
        "00AAAAA0000A1Z5",  // unknown state
        "27AAAA00000A1Z5",  // PAN letters short
        " 27AAAAA0000A1Z5",
    ];

    for case in cases {
        assert!(!validate_tax_identifier(case), "accepted {:?}", case);
    }
}

#[test]
fn test_pan_format() {
    assert!(validate_business_identifier("ABCDE1234F"));
    assert!(!validate_business_identifier("ABCDE1234"));
    assert!(!validate_business_identifier("abcde1234f"));
    assert!(!validate_business_identifier("ABCD01234F"));
}

#[test]
fn test_embedded_pan_of_valid_gstin_is_valid() {
    let gstin = TaxIdentifier::parse("09ABCDE1234F2ZX", "buyer_gstin").unwrap();
    assert_eq!(gstin.pan(), "ABCDE1234F");
    assert!(validate_business_identifier(gstin.pan()));
}

#[test]
fn test_parse_names_the_field() {
    let err = TaxIdentifier::parse("nonsense", "buyer_gstin").unwrap_err();
    assert_eq!(err.field(), Some("buyer_gstin"));
    assert_eq!(err.kind(), "validation_error");
}

#[test]
fn test_every_state_code_is_two_digits() {
    for state in STATE_CODES.iter() {
        assert_eq!(state.code.len(), 2);
        assert!(jurisdiction_prefix(state.code).is_some());
    }
}

#[test]
fn test_jurisdiction_precedence() {
    // Buyer identifier wins over place of supply
    assert!(!is_inter_state("27AAAAA0000A1Z5", Some("27BBBBB1111B1Z2"), Some("09")));
    assert!(is_inter_state("27AAAAA0000A1Z5", Some("09ABCDE1234F2ZX"), Some("27")));

    // Unregistered buyer: place of supply decides
    assert!(is_inter_state("27AAAAA0000A1Z5", None, Some("09")));
    assert!(!is_inter_state("27AAAAA0000A1Z5", None, Some("27")));

    // Neither: treated as intra-state; empty strings count as absent
    assert!(!is_inter_state("27AAAAA0000A1Z5", None, None));
    assert!(!is_inter_state("27AAAAA0000A1Z5", Some(""), Some("")));
}

#[test]
fn test_resolve_supply_records_place_of_supply() {
    let seller = TaxIdentifier::parse("27AAAAA0000A1Z5", "seller_gstin").unwrap();
    let buyer = TaxIdentifier::parse("09ABCDE1234F2ZX", "buyer_gstin").unwrap();

    let resolved = resolve_supply(&seller, Some(&buyer), None);
    assert_eq!(resolved.supply_type, SupplyType::InterState);
    assert_eq!(resolved.place_of_supply, "09");

    let resolved = resolve_supply(&seller, None, None);
    assert_eq!(resolved.supply_type, SupplyType::IntraState);
    assert_eq!(resolved.place_of_supply, "27");
}

proptest! {
    #[test]
    fn prop_validation_is_idempotent(code in "\\PC{0,20}") {
        prop_assert_eq!(validate_tax_identifier(&code), validate_tax_identifier(&code));
        prop_assert_eq!(validate_business_identifier(&code), validate_business_identifier(&code));
    }

    #[test]
    fn prop_generated_gstins_are_valid(
        state_index in 0usize..STATE_CODES.len(),
        pan in "[A-Z]{5}[0-9]{4}[A-Z]",
        entity in "[0-9A-Z]",
        check in "[0-9A-Z]",
    ) {
        let gstin = format!("{}{}{}Z{}", STATE_CODES[state_index].code, pan, entity, check);
        prop_assert!(validate_tax_identifier(&gstin), "rejected {}", gstin);
        prop_assert_eq!(jurisdiction_prefix(&gstin), Some(STATE_CODES[state_index].code));
    }

    #[test]
    fn prop_wrong_length_is_rejected(code in "[0-9A-Z]{0,14}|[0-9A-Z]{16,20}") {
        prop_assert!(!validate_tax_identifier(&code));
    }
}
