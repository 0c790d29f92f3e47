//! The checkout step machine: a closed set of states and an explicit
//! transition table, so an illegal move (say `Success` back to `Payment`)
//! is an error value rather than an unused code path.

use thiserror::Error;

use super::form::{validate_contact, validate_payment, CheckoutForm, FieldError};
use crate::utils::error::CheckoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    Contact,
    Payment,
    Review,
    /// Transient: a submission is in flight. Entered from `Review`, left
    /// only by the submission outcome.
    Processing,
    /// Terminal. No event leaves it.
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    ContinueContact,
    ContinuePayment,
    BeginSubmit,
    SubmitSucceeded,
    SubmitFailed,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("event {event:?} is not legal in step {from:?}")]
pub struct IllegalTransition {
    pub from: CheckoutStep,
    pub event: StepEvent,
}

/// The full transition table. Backward moves never re-run forward
/// validation; a failed submission lands back in `Review`.
pub fn apply(from: CheckoutStep, event: StepEvent) -> Result<CheckoutStep, IllegalTransition> {
    use CheckoutStep::*;
    use StepEvent::*;
    match (from, event) {
        (Contact, ContinueContact) => Ok(Payment),
        (Payment, ContinuePayment) => Ok(Review),
        (Review, BeginSubmit) => Ok(Processing),
        (Processing, SubmitSucceeded) => Ok(Success),
        (Processing, SubmitFailed) => Ok(Review),
        (Payment, Back) => Ok(Contact),
        (Review, Back) => Ok(Payment),
        _ => Err(IllegalTransition { from, event }),
    }
}

/// Drives the step machine over the form state. Forward moves run the
/// step's validation gate first; the step does not change when the gate
/// fails, and the failed checks are kept for inline display.
pub struct StepController {
    step: CheckoutStep,
    form: CheckoutForm,
    field_errors: Vec<FieldError>,
    error: Option<String>,
}

impl StepController {
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Contact,
            form: CheckoutForm::default(),
            field_errors: Vec::new(),
            error: None,
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    /// Failed checks from the last forward attempt, for inline display.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// The banner message from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_processing(&self) -> bool {
        self.step == CheckoutStep::Processing
    }

    pub fn continue_contact(&mut self) -> Result<(), CheckoutError> {
        let errors = validate_contact(&self.form.contact);
        if !errors.is_empty() {
            self.field_errors = errors;
            return Err(CheckoutError::Validation(
                "Check the contact details and try again".to_string(),
            ));
        }
        self.step = apply(self.step, StepEvent::ContinueContact)?;
        self.field_errors.clear();
        Ok(())
    }

    pub fn continue_payment(&mut self) -> Result<(), CheckoutError> {
        let errors = validate_payment(&self.form.payment);
        if !errors.is_empty() {
            self.field_errors = errors;
            return Err(CheckoutError::Validation(
                "Check the payment details and try again".to_string(),
            ));
        }
        self.step = apply(self.step, StepEvent::ContinuePayment)?;
        self.field_errors.clear();
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<(), CheckoutError> {
        self.step = apply(self.step, StepEvent::BeginSubmit)?;
        self.error = None;
        Ok(())
    }

    pub fn submit_succeeded(&mut self) -> Result<(), CheckoutError> {
        self.step = apply(self.step, StepEvent::SubmitSucceeded)?;
        self.error = None;
        Ok(())
    }

    pub fn submit_failed(&mut self, error: &CheckoutError) -> Result<(), CheckoutError> {
        self.step = apply(self.step, StepEvent::SubmitFailed)?;
        self.error = Some(error.user_message());
        Ok(())
    }

    /// Backward movement never validates and never touches field values.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        self.step = apply(self.step, StepEvent::Back)?;
        Ok(())
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
