//! HTTP client for the orders backend.

use reqwest::{Client, Response, StatusCode};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::models::order::OrderBody;
use crate::models::{
    CompleteOrderRequest, CompleteOrderResponse, CreateOrderRequest, CreateOrderResponse,
    EventDetail, IssuedTicket, Order,
};
use crate::utils::error::{CheckoutError, ORDER_CREATION_FALLBACK, PAYMENT_FALLBACK};

pub struct OrdersClient {
    client: Client,
    base_url: String,
}

impl OrdersClient {
    pub fn new(config: &Config) -> Result<Self, CheckoutError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /events/{id}`: the page-level event fetch.
    pub async fn fetch_event(&self, event_id: Uuid) -> Result<EventDetail, CheckoutError> {
        let response = self
            .client
            .get(format!("{}/events/{}", self.base_url, event_id))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = body_text(response).await;
            return Err(CheckoutError::EventLookupFailed(if body.is_empty() {
                format!("HTTP {}", status.as_u16())
            } else {
                body
            }));
        }
        // A malformed 2xx body is still an event-lookup failure, same as
        // the order endpoints map theirs.
        response
            .json::<EventDetail>()
            .await
            .map_err(|e| CheckoutError::EventLookupFailed(format!("malformed event body: {e}")))
    }

    /// `POST /orders`. A non-2xx status or a 2xx body without an order id
    /// both surface as [`CheckoutError::OrderCreationFailed`].
    pub async fn create_order(
        &self,
        token: &str,
        request: &CreateOrderRequest,
    ) -> Result<Order, CheckoutError> {
        debug!(event_id = %request.event_id, idempotency_key = %request.idempotency_key, "Creating order");
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CheckoutError::OrderCreationFailed(
                failure_message(response, ORDER_CREATION_FALLBACK).await,
            ));
        }

        // Defensive: a 2xx body without an order id is still a failure.
        let body: CreateOrderResponse = match response.json().await {
            Ok(body) => body,
            Err(_) => {
                return Err(CheckoutError::OrderCreationFailed(
                    ORDER_CREATION_FALLBACK.to_string(),
                ))
            }
        };
        match body.order {
            Some(OrderBody {
                id: Some(id),
                order_number,
            }) => Ok(Order { id, order_number }),
            _ => Err(CheckoutError::OrderCreationFailed(
                ORDER_CREATION_FALLBACK.to_string(),
            )),
        }
    }

    /// `POST /orders/{id}/complete`.
    pub async fn complete_order(
        &self,
        token: &str,
        order_id: Uuid,
        request: &CompleteOrderRequest,
    ) -> Result<Vec<IssuedTicket>, CheckoutError> {
        debug!(order_id = %order_id, "Completing order");
        let response = self
            .client
            .post(format!("{}/orders/{}/complete", self.base_url, order_id))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CheckoutError::PaymentFailed(
                failure_message(response, PAYMENT_FALLBACK).await,
            ));
        }

        let body: CompleteOrderResponse = match response.json().await {
            Ok(body) => body,
            Err(_) => return Err(CheckoutError::PaymentFailed(PAYMENT_FALLBACK.to_string())),
        };
        Ok(body.tickets)
    }
}

/// The response body as text, empty when unreadable.
async fn body_text(response: Response) -> String {
    response.text().await.unwrap_or_default()
}

/// Error body verbatim when present, the step's fixed fallback otherwise.
async fn failure_message(response: Response, fallback: &str) -> String {
    let status: StatusCode = response.status();
    let body = body_text(response).await;
    if body.trim().is_empty() {
        debug!(status = %status, "Error response with empty body");
        fallback.to_string()
    } else {
        body
    }
}
