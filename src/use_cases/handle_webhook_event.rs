use log::{info, warn};

use crate::domain::webhook::WebhookEvent;

/// Dispatches a verified provider event. Effects are log lines only; there
/// is no local state to update and delivery is acknowledged unconditionally
/// once the signature check has passed.
#[derive(Clone, Default)]
pub struct HandleWebhookEventUseCase;

impl HandleWebhookEventUseCase {
	pub fn new() -> Self {
		Self
	}

	pub fn execute(&self, event: &WebhookEvent) {
		match event {
			WebhookEvent::PaymentSucceeded { intent_id } => {
				info!("Payment succeeded: {intent_id}");
			}
			WebhookEvent::PaymentFailed { intent_id } => {
				warn!("Payment failed: {intent_id}");
			}
			WebhookEvent::Unhandled { event_type } => {
				info!("Unhandled event type: {event_type}");
			}
		}
	}
}
