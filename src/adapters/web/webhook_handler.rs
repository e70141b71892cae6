use actix_web::{HttpRequest, HttpResponse, Responder, post, web};
use log::warn;

use crate::adapters::web::schema::WebhookAck;
use crate::infrastructure::stripe::signature::WebhookVerifier;
use crate::infrastructure::stripe::types::StripeEvent;
use crate::use_cases::handle_webhook_event::HandleWebhookEventUseCase;

/// Takes the raw body: the signature covers the exact bytes Stripe sent,
/// so the payload must not pass through the JSON extractor first. Rejections
/// carry no body; nothing about the check is leaked to the caller.
#[post("/webhook")]
pub async fn webhook(
	req: HttpRequest,
	body: web::Bytes,
	verifier: web::Data<WebhookVerifier>,
	handle_event_use_case: web::Data<HandleWebhookEventUseCase>,
) -> impl Responder {
	let signature = req
		.headers()
		.get("stripe-signature")
		.and_then(|value| value.to_str().ok());

	if let Err(e) = verifier.verify(&body, signature) {
		warn!("Webhook rejected: {e}");
		return HttpResponse::BadRequest().finish();
	}

	let event = match serde_json::from_slice::<StripeEvent>(&body) {
		Ok(event) => event.into_domain(),
		Err(e) => {
			warn!("Webhook payload is not a valid event envelope: {e}");
			return HttpResponse::BadRequest().finish();
		}
	};

	handle_event_use_case.execute(&event);

	HttpResponse::Ok().json(WebhookAck { received: true })
}
