use thiserror::Error;
use tracing::error;

use crate::checkout::steps::IllegalTransition;

/// Fixed messages shown when a failing endpoint returns an empty body.
pub const ORDER_CREATION_FALLBACK: &str = "Order creation failed";
pub const PAYMENT_FALLBACK: &str = "Payment failed";

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Sign in to complete your purchase")]
    NotAuthenticated,

    #[error("Invalid checkout selection: {0}")]
    InvalidSelection(String),

    /// Carries the response body text verbatim when the backend returned one,
    /// otherwise [`ORDER_CREATION_FALLBACK`].
    #[error("{0}")]
    OrderCreationFailed(String),

    /// Carries the response body text verbatim when the backend returned one,
    /// otherwise [`PAYMENT_FALLBACK`].
    #[error("{0}")]
    PaymentFailed(String),

    #[error("Could not load event: {0}")]
    EventLookupFailed(String),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Illegal checkout transition")]
    Transition(#[from] IllegalTransition),

    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl CheckoutError {
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutError::Validation(_) => "VALIDATION_ERROR",
            CheckoutError::NotAuthenticated => "NOT_AUTHENTICATED",
            CheckoutError::InvalidSelection(_) => "INVALID_SELECTION",
            CheckoutError::OrderCreationFailed(_) => "ORDER_CREATION_FAILED",
            CheckoutError::PaymentFailed(_) => "PAYMENT_FAILED",
            CheckoutError::EventLookupFailed(_) => "EVENT_LOOKUP_FAILED",
            CheckoutError::SubmissionInFlight => "SUBMISSION_IN_FLIGHT",
            CheckoutError::Transition(_) => "ILLEGAL_TRANSITION",
            CheckoutError::Network(_) => "NETWORK_ERROR",
            CheckoutError::Storage(_) => "STORAGE_ERROR",
        }
    }

    pub fn log(&self) {
        match self {
            CheckoutError::Network(e) => {
                error!(error = ?e, code = self.code(), "Network error during checkout");
            }
            CheckoutError::Transition(t) => {
                error!(error = ?t, code = self.code(), "Illegal checkout transition");
            }
            other => {
                error!(error = ?other, code = other.code(), "Checkout error");
            }
        }
    }

    /// The message shown inline to the buyer. Transport details stay in the
    /// logs; everything else is already user-facing text.
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Network(_) => "A network error occurred. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
