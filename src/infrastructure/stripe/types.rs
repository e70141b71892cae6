//! Stripe wire types as they arrive in API responses and webhook payloads.

use serde::Deserialize;

use crate::domain::webhook::WebhookEvent;

/// PaymentIntent object as returned by `POST /v1/payment_intents`. Only the
/// fields this service hands back to the caller are read.
#[derive(Debug, Deserialize)]
pub struct StripePaymentIntent {
	pub id:            String,
	pub client_secret: String,
}

/// Error envelope Stripe wraps around non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct StripeErrorEnvelope {
	pub error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct StripeErrorBody {
	pub message: Option<String>,
}

/// Signed event envelope delivered to the webhook endpoint.
#[derive(Debug, Deserialize)]
pub struct StripeEvent {
	#[serde(rename = "type")]
	pub event_type: String,
	pub data:       StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
	pub object: serde_json::Value,
}

impl StripeEvent {
	/// Reduces the envelope to the domain event set. The intent id is read
	/// from `data.object.id`; an envelope without one still dispatches, with
	/// an empty id, since acknowledgment must not depend on payload shape.
	pub fn into_domain(self) -> WebhookEvent {
		let intent_id = self
			.data
			.object
			.get("id")
			.and_then(|v| v.as_str())
			.unwrap_or_default()
			.to_string();

		match self.event_type.as_str() {
			"payment_intent.succeeded" => {
				WebhookEvent::PaymentSucceeded { intent_id }
			}
			"payment_intent.payment_failed" => {
				WebhookEvent::PaymentFailed { intent_id }
			}
			_ => WebhookEvent::Unhandled {
				event_type: self.event_type,
			},
		}
	}
}
