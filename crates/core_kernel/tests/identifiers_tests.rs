//! Tests for the string identifier newtypes
//!
//! Tests cover generation, parsing, serde behaviour and the
//! rejection of blank identifiers.

use core_kernel::{ClaimId, LineItemId, OrderId, ReturnId, SwapId, VariantId};
use proptest::prelude::*;

mod line_item_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = LineItemId::new();
        let id2 = LineItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_uses_prefix() {
        let id = LineItemId::new();
        assert!(id.as_str().starts_with("item_"));
        assert_eq!(LineItemId::prefix(), "item");
    }

    #[test]
    fn test_parse_keeps_value_verbatim() {
        let id = LineItemId::parse("A").unwrap();
        assert_eq!(id.as_str(), "A");
        assert_eq!(id.to_string(), "A");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(LineItemId::parse("").is_err());
        assert!(LineItemId::parse(" \t").is_err());
    }

    #[test]
    fn test_from_str() {
        let id: LineItemId = "item_01".parse().unwrap();
        assert_eq!(id.as_ref(), "item_01");
    }

    #[test]
    fn test_try_from_string() {
        let id = LineItemId::try_from("item_02".to_string()).unwrap();
        let back: String = id.into();
        assert_eq!(back, "item_02");
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ClaimId::parse("claim_123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"claim_123\"");
    }

    #[test]
    fn test_deserializes_from_plain_string() {
        let id: SwapId = serde_json::from_str("\"swap_9\"").unwrap();
        assert_eq!(id.as_str(), "swap_9");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<OrderId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_string() {
        let result: Result<ReturnId, _> = serde_json::from_str("42");
        assert!(result.is_err());
    }
}

mod prefix_tests {
    use super::*;

    #[test]
    fn test_all_prefixes() {
        assert_eq!(OrderId::prefix(), "order");
        assert_eq!(LineItemId::prefix(), "item");
        assert_eq!(VariantId::prefix(), "variant");
        assert_eq!(ClaimId::prefix(), "claim");
        assert_eq!(SwapId::prefix(), "swap");
        assert_eq!(ReturnId::prefix(), "ret");
    }

    #[test]
    fn test_generated_ids_have_prefix() {
        assert!(OrderId::new().as_str().starts_with("order_"));
        assert!(ClaimId::new().as_str().starts_with("claim_"));
        assert!(SwapId::new().as_str().starts_with("swap_"));
        assert!(ReturnId::new().as_str().starts_with("ret_"));
        assert!(VariantId::default().as_str().starts_with("variant_"));
    }
}

proptest! {
    #[test]
    fn prop_parse_roundtrips_non_blank(value in "[a-z]{1,8}_[A-Za-z0-9]{1,26}") {
        let id = LineItemId::parse(value.clone()).unwrap();
        prop_assert_eq!(id.to_string(), value);
    }
}
