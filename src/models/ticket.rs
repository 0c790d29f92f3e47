use serde::{Deserialize, Serialize};

/// A backend-issued entry credential returned after order completion.
/// Display only: the client never generates or verifies authenticity data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedTicket {
    pub ticket_number: String,
    #[serde(default)]
    pub qr_code: Option<String>,
}
