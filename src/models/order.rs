use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One order line: a ticket tier and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub tier_id: Uuid,
    pub quantity: u32,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub event_id: Uuid,
    pub items: Vec<OrderItem>,
    pub buyer_email: String,
    pub buyer_first_name: String,
    pub buyer_last_name: String,
    pub idempotency_key: Uuid,
}

/// Wire shape of the create-order response. Both levels are optional so a
/// malformed 2xx body surfaces as a checkout failure instead of a decode
/// error.
#[derive(Debug, Deserialize)]
pub struct CreateOrderResponse {
    #[serde(default)]
    pub order: Option<OrderBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBody {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub order_number: Option<String>,
}

/// A confirmed order: the id has been checked, the number may still be
/// absent (the receipt falls back to a placeholder).
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub order_number: Option<String>,
}

/// Body of `POST /orders/{id}/complete`. Card details never travel with it;
/// payment capture happens server-side and only the method name is sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteOrderRequest {
    pub items: Vec<OrderItem>,
    pub payment_method: &'static str,
}

pub const PAYMENT_METHOD_CARD: &str = "card";

#[derive(Debug, Deserialize)]
pub struct CompleteOrderResponse {
    #[serde(default)]
    pub tickets: Vec<super::ticket::IssuedTicket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_request_uses_camel_case_wire_names() {
        let req = CreateOrderRequest {
            event_id: Uuid::nil(),
            items: vec![OrderItem {
                tier_id: Uuid::nil(),
                quantity: 2,
            }],
            buyer_email: "a@b.co".into(),
            buyer_first_name: "Ada".into(),
            buyer_last_name: "Lovelace".into(),
            idempotency_key: Uuid::nil(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert!(value.get("eventId").is_some());
        assert!(value.get("buyerEmail").is_some());
        assert!(value.get("idempotencyKey").is_some());
        assert!(value["items"][0].get("tierId").is_some());
    }

    #[test]
    fn malformed_success_bodies_decode_to_missing_order_id() {
        let resp: CreateOrderResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.order.is_none());

        let resp: CreateOrderResponse =
            serde_json::from_str(r#"{"order":{"orderNumber":"SP-1234"}}"#).unwrap();
        assert!(resp.order.unwrap().id.is_none());
    }
}
