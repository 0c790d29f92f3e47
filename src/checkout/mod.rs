pub mod composer;
pub mod form;
pub mod steps;

pub use composer::{compose, persist, resolve, SelectionHandoff};
pub use form::{CheckoutForm, ContactDetails, FieldError, PaymentDetails, ReviewConsents};
pub use steps::{CheckoutStep, StepController, StepEvent};
