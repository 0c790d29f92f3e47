//! Checkout smoke driver: resolves the pending selection from the session
//! file and runs the full submission sequence against the configured orders
//! backend. Intended for poking a deployed or local backend by hand.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

use stagepass_checkout::session::load_selection;
use stagepass_checkout::{
    Config, FileStore, OrdersClient, Receipt, StepController, SubmissionSequencer,
};

const DEFAULT_SESSION_FILE: &str = "stagepass-session.json";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let session_path = config
        .session_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));
    let store = FileStore::open(&session_path).expect("Failed to open session file");

    let selection = load_selection(&store)
        .expect("Failed to read session file")
        .expect("No pending checkout selection in the session file");

    tracing::info!(
        event = %selection.event.title,
        tier = %selection.tier_name,
        quantity = selection.quantity,
        total = %selection.total(),
        "Resolved pending selection"
    );

    let mut controller = StepController::new();
    {
        let contact = &mut controller.form_mut().contact;
        contact.email = env::var("BUYER_EMAIL").expect("BUYER_EMAIL must be set");
        contact.first_name = env::var("BUYER_FIRST_NAME").expect("BUYER_FIRST_NAME must be set");
        contact.last_name = env::var("BUYER_LAST_NAME").expect("BUYER_LAST_NAME must be set");
        contact.agree_to_terms = true;
    }
    {
        // Card fields are never transmitted; placeholders satisfy the
        // presence gate the same way the real form would.
        let payment = &mut controller.form_mut().payment;
        payment.card_number = "4242 4242 4242 4242".into();
        payment.expiry = "12/30".into();
        payment.cvc = "123".into();
        payment.billing_address = "1 Smoke Test Lane".into();
        payment.city = "London".into();
        payment.postcode = "N1 9GU".into();
    }

    controller.continue_contact().expect("Contact details rejected");
    controller.continue_payment().expect("Payment details rejected");
    controller.begin_submit().expect("Could not start submission");

    let client = OrdersClient::new(&config).expect("Failed to build HTTP client");
    let sequencer = SubmissionSequencer::new(client);
    let contact = controller.form().contact.clone();

    match sequencer.submit(&store, &selection, &contact).await {
        Ok(outcome) => {
            controller
                .submit_succeeded()
                .expect("Controller rejected success transition");
            let receipt = Receipt::from_outcome(outcome);
            tracing::info!(order_number = %receipt.order_number, "Purchase complete");
            for ticket in &receipt.tickets {
                tracing::info!(
                    ticket_number = %ticket.ticket_number,
                    has_qr = ticket.qr_code.is_some(),
                    "Ticket issued"
                );
            }
        }
        Err(e) => {
            let _ = controller.submit_failed(&e);
            tracing::error!(code = e.code(), "Checkout failed: {}", e.user_message());
            std::process::exit(1);
        }
    }
}
