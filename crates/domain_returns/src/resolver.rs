//! Returnable items resolution
//!
//! Derives the line items of an order that can still be returned or
//! exchanged, taking earlier claims and swaps into account:
//!
//! 1. Start from a copy of the order's items, keyed by line item id.
//! 2. For each claim, collect its claimed quantities (unless its return was
//!    canceled) and let its shipped additional items replace earlier entries.
//! 3. For each fulfilled swap, let its additional items replace earlier
//!    entries. Skipped when resolving a claim.
//! 4. Subtract the collected claimed quantities, dropping items that reach
//!    zero.
//!
//! Items left with a zero quantity, whether from deduction or as supplied,
//! are never returned.
//!
//! The result follows the order in which ids were first seen.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::LineItemId;
use crate::claim::ClaimItem;
use crate::error::ReturnsError;
use crate::line_item::LineItem;
use crate::order::Order;

/// What to do when a claim takes more of an item than is left
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverClaimPolicy {
    /// Fail with [`ReturnsError::OverClaimed`]
    #[default]
    Reject,
    /// Treat the item as fully claimed and drop it
    Clamp,
}

/// Computes returnable line items for orders and claims
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReturnableItemsResolver {
    over_claim: OverClaimPolicy,
}

impl ReturnableItemsResolver {
    pub fn new(over_claim: OverClaimPolicy) -> Self {
        Self { over_claim }
    }

    pub fn over_claim_policy(&self) -> OverClaimPolicy {
        self.over_claim
    }

    /// Returns the items of `order` still eligible for return.
    ///
    /// When `is_claim` is set the aggregate is a claim viewed on its own and
    /// swaps are ignored.
    pub fn resolve(&self, order: &Order, is_claim: bool) -> Result<Vec<LineItem>, ReturnsError> {
        let mut items: IndexMap<LineItemId, LineItem> = order
            .items
            .iter()
            .map(|item| (item.id.clone(), item.clone()))
            .collect();

        let mut claimed: Vec<&ClaimItem> = Vec::new();

        for claim in &order.claims {
            if !claim.is_return_canceled() {
                claimed.extend(claim.claim_items.iter());
            }

            if claim.is_pending() {
                debug!(claim_id = ?claim.id, "Skipping additional items of pending claim");
                continue;
            }

            for item in claim.additional_items.iter().filter(|i| i.is_shipped_or_settled()) {
                items.insert(item.id.clone(), item.clone());
            }
        }

        if !is_claim {
            for swap in order.swaps.iter().filter(|s| !s.is_unfulfilled()) {
                for item in &swap.additional_items {
                    items.insert(item.id.clone(), item.clone());
                }
            }
        }

        for claim_item in claimed {
            self.deduct(&mut items, claim_item)?;
        }

        // Zero-quantity rows can arrive straight from the order or a claim/swap
        items.retain(|_, item| item.quantity > 0);

        debug!(
            order_id = ?order.id,
            is_claim,
            returnable = items.len(),
            "Resolved returnable items"
        );

        Ok(items.into_values().collect())
    }

    fn deduct(
        &self,
        items: &mut IndexMap<LineItemId, LineItem>,
        claim_item: &ClaimItem,
    ) -> Result<(), ReturnsError> {
        let Some(item) = items.get_mut(&claim_item.item_id) else {
            debug!(item_id = %claim_item.item_id, "Claimed item is not returnable, nothing to deduct");
            return Ok(());
        };

        let remaining = match item.quantity.checked_sub(claim_item.quantity) {
            Some(remaining) => remaining,
            None => match self.over_claim {
                OverClaimPolicy::Reject => {
                    return Err(ReturnsError::OverClaimed {
                        item_id: claim_item.item_id.clone(),
                        available: item.quantity,
                        claimed: claim_item.quantity,
                    });
                }
                OverClaimPolicy::Clamp => {
                    warn!(
                        item_id = %claim_item.item_id,
                        available = item.quantity,
                        claimed = claim_item.quantity,
                        "Claimed quantity exceeds returnable quantity, dropping item"
                    );
                    0
                }
            },
        };

        if remaining > 0 {
            item.quantity = remaining;
            return Ok(());
        }

        items.shift_remove(&claim_item.item_id);
        Ok(())
    }
}

/// Resolves returnable items with the default [`OverClaimPolicy::Reject`] policy
pub fn resolve_returnable_items(order: &Order, is_claim: bool) -> Result<Vec<LineItem>, ReturnsError> {
    ReturnableItemsResolver::default().resolve(order, is_claim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::Claim;
    use crate::status::{ClaimPaymentStatus, FulfillmentStatus};

    fn id(value: &str) -> LineItemId {
        LineItemId::parse(value).unwrap()
    }

    fn claim(claim_items: Vec<ClaimItem>) -> Claim {
        Claim {
            id: None,
            claim_items,
            additional_items: Vec::new(),
            fulfillment_status: FulfillmentStatus::Fulfilled,
            payment_status: ClaimPaymentStatus::Refunded,
            return_order: None,
        }
    }

    #[test]
    fn test_deduction_for_unknown_item_is_ignored() {
        let mut order = Order::new(vec![LineItem::new(id("A"), 2)]);
        order.claims.push(claim(vec![ClaimItem::new(id("B"), 1)]));

        let items = resolve_returnable_items(&order, false).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_removal_keeps_order_of_remaining_items() {
        let mut order = Order::new(vec![
            LineItem::new(id("A"), 1),
            LineItem::new(id("B"), 1),
            LineItem::new(id("C"), 1),
        ]);
        order.claims.push(claim(vec![ClaimItem::new(id("B"), 1)]));

        let ids: Vec<_> = resolve_returnable_items(&order, false)
            .unwrap()
            .into_iter()
            .map(|i| i.id.to_string())
            .collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_policy_accessor() {
        let resolver = ReturnableItemsResolver::new(OverClaimPolicy::Clamp);
        assert_eq!(resolver.over_claim_policy(), OverClaimPolicy::Clamp);
        assert_eq!(ReturnableItemsResolver::default().over_claim_policy(), OverClaimPolicy::Reject);
    }
}
