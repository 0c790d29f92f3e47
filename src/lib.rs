//! Checkout/order pipeline for the StagePass event-ticketing marketplace.
//!
//! Covers the buyer-side flow between picking a ticket tier and holding an
//! issued ticket: the persisted selection handoff, the three-step checkout
//! form machine, and the create-then-complete order submission against the
//! orders backend.

pub mod api;
pub mod checkout;
pub mod config;
pub mod models;
pub mod receipt;
pub mod session;
pub mod submit;
pub mod utils;

pub use api::OrdersClient;
pub use checkout::{CheckoutStep, SelectionHandoff, StepController};
pub use config::Config;
pub use models::CheckoutSelection;
pub use receipt::Receipt;
pub use session::{FileStore, MemoryStore, SessionStore};
pub use submit::{SubmissionOutcome, SubmissionSequencer};
pub use utils::error::CheckoutError;
