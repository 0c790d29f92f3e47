//! The order submission sequencer: the two-call create-then-complete
//! pipeline, with the auth and selection guards in front of it and the
//! cosmetic progress ticker alongside.

pub mod progress;

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::OrdersClient;
use crate::checkout::form::ContactDetails;
use crate::models::{
    CheckoutSelection, CompleteOrderRequest, CreateOrderRequest, IssuedTicket, Order,
    PAYMENT_METHOD_CARD,
};
use crate::session::{self, SessionStore};
use crate::utils::error::CheckoutError;

use progress::Progress;

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub order: Order,
    pub tickets: Vec<IssuedTicket>,
}

pub struct SubmissionSequencer {
    client: OrdersClient,
    in_flight: AtomicBool,
    progress: Progress,
}

impl SubmissionSequencer {
    pub fn new(client: OrdersClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
            progress: Progress::new(),
        }
    }

    /// Current cosmetic progress percentage, for the submit button's bar.
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Runs the full submission sequence once. A second call while one is
    /// in flight fails immediately; the in-flight guard is an atomic swap,
    /// not an advisory flag, so a double press cannot race past it.
    ///
    /// There is no automatic retry: any failure resolves the sequence and
    /// the buyer re-presses submit. The selection's idempotency key travels
    /// with every create attempt, so a retry after a partial failure lets
    /// the backend dedupe instead of creating a second order.
    pub async fn submit(
        &self,
        store: &dyn SessionStore,
        selection: &CheckoutSelection,
        contact: &ContactDetails,
    ) -> Result<SubmissionOutcome, CheckoutError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(CheckoutError::SubmissionInFlight);
        }
        let result = self.run(store, selection, contact).await;
        match &result {
            Ok(outcome) => {
                self.progress.finish();
                // The pending selection has served its purpose.
                if let Err(e) = session::clear_selection(store) {
                    warn!(error = %e, "Could not clear the completed selection");
                }
                info!(
                    order_id = %outcome.order.id,
                    tickets = outcome.tickets.len(),
                    "Checkout complete"
                );
            }
            Err(e) => {
                self.progress.reset();
                e.log();
            }
        }
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn run(
        &self,
        store: &dyn SessionStore,
        selection: &CheckoutSelection,
        contact: &ContactDetails,
    ) -> Result<SubmissionOutcome, CheckoutError> {
        // Both guards run before any network traffic.
        let token = session::auth_token(store)?.ok_or(CheckoutError::NotAuthenticated)?;
        let items = selection.order_items();
        if items.is_empty() {
            return Err(CheckoutError::InvalidSelection(
                "nothing to order; start again from the event page".to_string(),
            ));
        }

        let _ticker = self.progress.start_ticker();

        let create = CreateOrderRequest {
            event_id: selection.event.event_id,
            items: items.clone(),
            buyer_email: contact.email.clone(),
            buyer_first_name: contact.first_name.clone(),
            buyer_last_name: contact.last_name.clone(),
            idempotency_key: selection.idempotency_key,
        };
        let order = self.client.create_order(&token, &create).await?;
        info!(order_id = %order.id, "Order created");

        let complete = CompleteOrderRequest {
            items,
            payment_method: PAYMENT_METHOD_CARD,
        };
        let tickets = self.client.complete_order(&token, order.id, &complete).await?;

        Ok(SubmissionOutcome { order, tickets })
    }
}
