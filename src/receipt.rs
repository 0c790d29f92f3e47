//! Display data for the confirmation view.

use uuid::Uuid;

use crate::models::IssuedTicket;
use crate::submit::SubmissionOutcome;

#[derive(Debug, Clone)]
pub struct Receipt {
    /// Server-assigned order number when the backend returned one, else a
    /// client-generated placeholder. The placeholder is not authoritative
    /// and only exists so the confirmation view has something to show.
    pub order_number: String,
    pub tickets: Vec<IssuedTicket>,
}

impl Receipt {
    pub fn from_outcome(outcome: SubmissionOutcome) -> Self {
        let order_number = outcome
            .order
            .order_number
            .unwrap_or_else(placeholder_order_number);
        Self {
            order_number,
            tickets: outcome.tickets,
        }
    }

    /// The ticket shown on the summary card.
    pub fn lead_ticket(&self) -> Option<&IssuedTicket> {
        self.tickets.first()
    }
}

fn placeholder_order_number() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("SP-{}", &raw[..8])
}
