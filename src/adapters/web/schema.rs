use serde::{Deserialize, Serialize};

/// Body of `POST /create-payment-intent`. `amount` and `currency` are
/// required by contract but optional here so the endpoint can answer with
/// the documented `{"error": ...}` body instead of a deserialization error.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CreatePaymentIntentRequest {
	pub amount:   Option<i64>,
	pub currency: Option<String>,
	#[serde(rename = "invoiceNumber")]
	pub invoice_number: Option<String>,
	#[serde(rename = "customerEmail")]
	pub customer_email: Option<String>,
	#[serde(rename = "customerName")]
	pub customer_name:  Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentIntentResponse {
	#[serde(rename = "clientSecret")]
	pub client_secret: String,
	#[serde(rename = "paymentIntentId")]
	pub payment_intent_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookAck {
	pub received: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HealthResponse {
	pub status:    String,
	pub message:   String,
	pub timestamp: String,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub currency: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub region:   Option<String>,
}
