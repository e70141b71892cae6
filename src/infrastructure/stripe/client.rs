use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::payment::{IntentSpec, PaymentIntent};
use crate::infrastructure::stripe::types::{
	StripeErrorEnvelope, StripePaymentIntent,
};

/// [`PaymentGateway`] backed by the Stripe REST API.
///
/// Requests are form-encoded with the secret key as basic-auth username,
/// the way the Stripe API expects. One outbound call per invocation, no
/// retries; a failed call fails that one request.
pub struct StripeGateway {
	api_key:     SecretString,
	base_url:    String,
	http_client: Client,
}

impl StripeGateway {
	pub fn new(api_key: SecretString, base_url: String) -> Self {
		Self {
			api_key,
			base_url,
			http_client: Client::new(),
		}
	}

	fn form_params(spec: &IntentSpec) -> Vec<(&'static str, String)> {
		let mut params = vec![
			("amount", spec.amount.to_string()),
			("currency", spec.currency.clone()),
			(
				"metadata[invoiceNumber]",
				spec.invoice_number.clone().unwrap_or_else(|| "N/A".into()),
			),
			(
				"metadata[customerName]",
				spec.customer_name.clone().unwrap_or_else(|| "N/A".into()),
			),
			("automatic_payment_methods[enabled]", "true".to_string()),
		];

		if let Some(email) = &spec.receipt_email {
			params.push(("receipt_email", email.clone()));
		}
		if let Some(description) = &spec.description {
			params.push(("description", description.clone()));
		}
		if let Some(suffix) = &spec.statement_descriptor_suffix {
			params.push(("statement_descriptor_suffix", suffix.clone()));
		}

		params
	}
}

#[async_trait]
impl PaymentGateway for StripeGateway {
	async fn create_intent(
		&self,
		spec: IntentSpec,
	) -> Result<PaymentIntent, GatewayError> {
		let url = format!(
			"{}/v1/payment_intents",
			self.base_url.trim_end_matches('/')
		);

		let response = self
			.http_client
			.post(&url)
			.basic_auth(self.api_key.expose_secret(), Option::<&str>::None)
			.form(&Self::form_params(&spec))
			.send()
			.await
			.map_err(|e| GatewayError::Transport {
				message: e.to_string(),
			})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			let message = serde_json::from_str::<StripeErrorEnvelope>(&body)
				.ok()
				.and_then(|envelope| envelope.error.message)
				.unwrap_or_else(|| {
					format!("Stripe API returned status {status}")
				});
			return Err(GatewayError::Api { message });
		}

		let intent: StripePaymentIntent =
			response.json().await.map_err(|e| GatewayError::Transport {
				message: format!("failed to parse Stripe response: {e}"),
			})?;

		Ok(PaymentIntent {
			id:            intent.id,
			client_secret: intent.client_secret,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn spec() -> IntentSpec {
		IntentSpec {
			amount: 1000,
			currency: "gbp".to_string(),
			invoice_number: Some("INV-1".to_string()),
			customer_name: Some("Jane Doe".to_string()),
			receipt_email: None,
			description: None,
			statement_descriptor_suffix: None,
		}
	}

	#[test]
	fn test_form_params_carry_amount_currency_and_metadata() {
		let params = StripeGateway::form_params(&spec());

		assert!(params.contains(&("amount", "1000".to_string())));
		assert!(params.contains(&("currency", "gbp".to_string())));
		assert!(
			params.contains(&("metadata[invoiceNumber]", "INV-1".to_string()))
		);
		assert!(
			params.contains(&("metadata[customerName]", "Jane Doe".to_string()))
		);
		assert!(params.contains(&(
			"automatic_payment_methods[enabled]",
			"true".to_string()
		)));
	}

	#[test]
	fn test_form_params_default_missing_metadata_to_na() {
		let params = StripeGateway::form_params(&IntentSpec {
			invoice_number: None,
			customer_name: None,
			..spec()
		});

		assert!(params.contains(&("metadata[invoiceNumber]", "N/A".to_string())));
		assert!(params.contains(&("metadata[customerName]", "N/A".to_string())));
	}

	#[test]
	fn test_form_params_include_optional_fields_only_when_present() {
		let bare = StripeGateway::form_params(&spec());
		assert!(bare.iter().all(|(k, _)| *k != "receipt_email"));
		assert!(bare.iter().all(|(k, _)| *k != "description"));
		assert!(
			bare.iter()
				.all(|(k, _)| *k != "statement_descriptor_suffix")
		);

		let full = StripeGateway::form_params(&IntentSpec {
			receipt_email: Some("jane@example.com".to_string()),
			description: Some("Payment for invoice INV-1".to_string()),
			statement_descriptor_suffix: Some("INVOICE".to_string()),
			..spec()
		});
		assert!(
			full.contains(&("receipt_email", "jane@example.com".to_string()))
		);
		assert!(full.contains(&(
			"description",
			"Payment for invoice INV-1".to_string()
		)));
		assert!(
			full.contains(&("statement_descriptor_suffix", "INVOICE".to_string()))
		);
	}
}
