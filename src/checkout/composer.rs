//! Turns a tier pick on the event page into the persisted checkout
//! selection, and resolves that selection again when the checkout page
//! mounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CheckoutSelection, EventDetail, EventSnapshot};
use crate::session::{self, SessionStore};
use crate::utils::error::CheckoutError;

/// Redundant copy of the key selection fields, carried on the checkout
/// route (the frontend's query parameters) so a direct link still works
/// when the persisted record is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionHandoff {
    pub tier_id: Uuid,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub unit_service_fee: Decimal,
}

impl SelectionHandoff {
    pub fn from_selection(selection: &CheckoutSelection) -> Self {
        Self {
            tier_id: selection.tier_id,
            quantity: selection.quantity,
            unit_price: selection.unit_price,
            unit_service_fee: selection.unit_service_fee,
        }
    }
}

/// Builds a selection from a tier pick. Pure apart from the id generation;
/// quantity bounds are the only thing that can fail besides an unknown tier.
pub fn compose(
    event: &EventDetail,
    tier_id: Uuid,
    quantity: u32,
    max_per_purchase: u32,
) -> Result<CheckoutSelection, CheckoutError> {
    let tier = event.tier(tier_id).ok_or_else(|| {
        CheckoutError::InvalidSelection(format!("tier {tier_id} is not on this event"))
    })?;
    if quantity < 1 || quantity > max_per_purchase {
        return Err(CheckoutError::Validation(format!(
            "Quantity must be between 1 and {max_per_purchase}"
        )));
    }
    Ok(CheckoutSelection {
        event: EventSnapshot::from_detail(event),
        tier_id: tier.id,
        tier_name: tier.name.clone(),
        unit_price: tier.price,
        unit_service_fee: tier.service_fee,
        quantity,
        idempotency_key: Uuid::new_v4(),
    })
}

/// Overwrites any previously persisted selection and returns the handoff
/// copy for the checkout route.
pub fn persist(
    store: &dyn SessionStore,
    selection: &CheckoutSelection,
) -> Result<SelectionHandoff, CheckoutError> {
    session::store_selection(store, selection)?;
    Ok(SelectionHandoff::from_selection(selection))
}

/// Resolves the selection on checkout mount: the persisted record wins;
/// otherwise the handoff rebuilds one against the freshly fetched event
/// (storage cleared, direct link). The rebuilt record is persisted so a
/// later submission retry keeps a stable idempotency key.
pub fn resolve(
    store: &dyn SessionStore,
    event: &EventDetail,
    handoff: Option<&SelectionHandoff>,
    max_per_purchase: u32,
) -> Result<CheckoutSelection, CheckoutError> {
    if let Some(selection) = session::load_selection(store)? {
        return Ok(selection);
    }
    let Some(handoff) = handoff else {
        return Err(CheckoutError::InvalidSelection(
            "no pending checkout selection; start again from the event page".to_string(),
        ));
    };

    let tier = event.tier(handoff.tier_id).ok_or_else(|| {
        CheckoutError::InvalidSelection(format!(
            "tier {} is not on this event",
            handoff.tier_id
        ))
    })?;
    if handoff.quantity < 1 || handoff.quantity > max_per_purchase {
        return Err(CheckoutError::InvalidSelection(format!(
            "quantity {} is out of range",
            handoff.quantity
        )));
    }
    let selection = CheckoutSelection {
        event: EventSnapshot::from_detail(event),
        tier_id: tier.id,
        tier_name: tier.name.clone(),
        // Handoff figures are the ones quoted at selection time; the tier
        // may have been repriced since, the backend re-validates either way.
        unit_price: handoff.unit_price,
        unit_service_fee: handoff.unit_service_fee,
        quantity: handoff.quantity,
        idempotency_key: Uuid::new_v4(),
    };
    session::store_selection(store, &selection)?;
    Ok(selection)
}
