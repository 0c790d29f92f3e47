//! In-memory checkout form state and the per-step validation gates.
//!
//! Validation is deliberately shallow, matching the backend contract: email
//! is a shape check, card fields are presence-only (no Luhn, no expiry
//! validity) because card capture happens server-side and none of these
//! fields are ever transmitted.

use serde::{Deserialize, Serialize};

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub create_account: bool,
    /// Collected and validated when `create_account` is set, but never
    /// transmitted by the submission sequence; account creation is a
    /// separate backend concern.
    pub password: Option<String>,
    pub agree_to_terms: bool,
    pub agree_to_marketing: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
    pub billing_address: String,
    pub city: String,
    pub postcode: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewConsents {
    pub agree_terms: bool,
    pub agree_refund: bool,
    pub marketing_opt_in: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub contact: ContactDetails,
    pub payment: PaymentDetails,
    pub review: ReviewConsents,
}

/// One failed field check, for inline display next to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Shape check only: something before an `@`, and a dot somewhere in the
/// domain part. Deliverability is not the client's problem.
pub fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn validate_contact(contact: &ContactDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !email_looks_valid(&contact.email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    if contact.first_name.trim().is_empty() {
        errors.push(FieldError::new("firstName", "First name is required"));
    }
    if contact.last_name.trim().is_empty() {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }
    if contact.create_account {
        let len = contact.password.as_deref().map_or(0, |p| p.chars().count());
        if len < MIN_PASSWORD_LEN {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 8 characters",
            ));
        }
    }
    errors
}

pub fn validate_payment(payment: &PaymentDetails) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let required = [
        (
            "cardNumber",
            payment.card_number.as_str(),
            "Card number is required",
        ),
        ("expiry", payment.expiry.as_str(), "Expiry date is required"),
        ("cvc", payment.cvc.as_str(), "Security code is required"),
        (
            "billingAddress",
            payment.billing_address.as_str(),
            "Billing address is required",
        ),
        ("city", payment.city.as_str(), "City is required"),
        ("postcode", payment.postcode.as_str(), "Postcode is required"),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, message));
        }
    }
    errors
}
