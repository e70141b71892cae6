use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{error, warn};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::{
	CreatePaymentIntentRequest, CreatePaymentIntentResponse,
};
use crate::use_cases::create_payment_intent::{
	CreatePaymentIntentError, CreatePaymentIntentUseCase,
};
use crate::use_cases::dto::CreatePaymentIntentCommand;

#[post("/create-payment-intent")]
pub async fn create_payment_intent(
	payload: web::Json<CreatePaymentIntentRequest>,
	use_case: web::Data<CreatePaymentIntentUseCase>,
) -> impl Responder {
	let command = CreatePaymentIntentCommand {
		amount:         payload.amount,
		currency:       payload.currency.clone(),
		invoice_number: payload.invoice_number.clone(),
		customer_email: payload.customer_email.clone(),
		customer_name:  payload.customer_name.clone(),
	};

	match use_case.execute(command).await {
		Ok(intent) => {
			HttpResponse::Ok().json(CreatePaymentIntentResponse {
				client_secret:     intent.client_secret,
				payment_intent_id: intent.id,
			})
		}
		Err(CreatePaymentIntentError::Validation { reason }) => {
			warn!("Rejected payment intent request: {reason}");
			ApiError::BadClientData { reason }.error_response()
		}
		Err(CreatePaymentIntentError::Gateway { source }) => {
			error!("Error creating payment intent: {source}");
			ApiError::Gateway {
				reason: source.to_string(),
			}
			.error_response()
		}
	}
}
