use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventSnapshot;
use super::order::OrderItem;

/// The persisted record capturing a buyer's chosen tier/quantity/event
/// snapshot between the event page and the checkout page. Overwritten by the
/// next selection; cleared after a successful purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSelection {
    pub event: EventSnapshot,
    pub tier_id: Uuid,
    pub tier_name: String,
    pub unit_price: Decimal,
    pub unit_service_fee: Decimal,
    pub quantity: u32,
    /// Generated once per selection and sent on every order-creation attempt,
    /// so a retry after a partial failure cannot create a duplicate order.
    pub idempotency_key: Uuid,
}

impl CheckoutSelection {
    /// Totals are always recomputed from the unit figures, never stored.
    pub fn subtotal(&self) -> Decimal {
        (self.unit_price * Decimal::from(self.quantity)).round_dp(2)
    }

    pub fn total_fees(&self) -> Decimal {
        (self.unit_service_fee * Decimal::from(self.quantity)).round_dp(2)
    }

    pub fn total(&self) -> Decimal {
        (self.unit_price * Decimal::from(self.quantity)
            + self.unit_service_fee * Decimal::from(self.quantity))
        .round_dp(2)
    }

    /// Order lines for submission. Entries with a nil tier id or a zero
    /// quantity are dropped rather than sent.
    pub fn order_items(&self) -> Vec<OrderItem> {
        let item = OrderItem {
            tier_id: self.tier_id,
            quantity: self.quantity,
        };
        [item]
            .into_iter()
            .filter(|i| !i.tier_id.is_nil() && i.quantity > 0)
            .collect()
    }
}
