use std::sync::Arc;

use derive_more::derive::{Display, Error};
use log::info;

use crate::domain::gateway::{GatewayError, PaymentGateway};
use crate::domain::payment::{IntentPolicy, IntentSpec, PaymentIntent};
use crate::use_cases::dto::CreatePaymentIntentCommand;

#[derive(Debug, Display, Error)]
pub enum CreatePaymentIntentError {
	#[display("{reason}")]
	Validation { reason: String },
	#[display("{source}")]
	Gateway { source: GatewayError },
}

/// Validates a creation request and delegates it to the payment provider.
/// No local state and no retries; the provider owns the intent lifecycle.
#[derive(Clone)]
pub struct CreatePaymentIntentUseCase {
	gateway: Arc<dyn PaymentGateway>,
	policy:  IntentPolicy,
}

impl CreatePaymentIntentUseCase {
	pub fn new(gateway: Arc<dyn PaymentGateway>, policy: IntentPolicy) -> Self {
		Self { gateway, policy }
	}

	pub async fn execute(
		&self,
		command: CreatePaymentIntentCommand,
	) -> Result<PaymentIntent, CreatePaymentIntentError> {
		let (Some(amount), Some(currency)) =
			(command.amount, command.currency.as_deref())
		else {
			return Err(CreatePaymentIntentError::Validation {
				reason: "Amount and currency are required".to_string(),
			});
		};

		if amount <= 0 {
			return Err(CreatePaymentIntentError::Validation {
				reason: "Amount must be a positive integer in the smallest \
				         currency unit"
					.to_string(),
			});
		}

		if let Some(required) = &self.policy.restricted_currency {
			if !currency.eq_ignore_ascii_case(required) {
				return Err(CreatePaymentIntentError::Validation {
					reason: format!(
						"Unsupported currency '{}'. Only {} payments are \
						 accepted.",
						currency,
						required.to_uppercase()
					),
				});
			}
		}

		let spec = IntentSpec {
			amount,
			currency: currency.to_lowercase(),
			invoice_number: command.invoice_number.clone(),
			customer_name: command.customer_name.clone(),
			receipt_email: command.customer_email,
			description: command
				.invoice_number
				.as_deref()
				.map(|n| format!("Payment for invoice {n}")),
			statement_descriptor_suffix: self
				.policy
				.statement_descriptor_suffix
				.clone(),
		};

		let intent = self
			.gateway
			.create_intent(spec)
			.await
			.map_err(|source| CreatePaymentIntentError::Gateway { source })?;

		info!(
			"Payment intent created: {} for {} - {}",
			intent.id,
			command.customer_name.as_deref().unwrap_or("N/A"),
			command.invoice_number.as_deref().unwrap_or("N/A")
		);

		Ok(intent)
	}
}

#[cfg(test)]
mod tests {
	use async_trait::async_trait;

	use super::*;

	/// Fails the test if the use case reaches the provider.
	struct UnreachableGateway;

	#[async_trait]
	impl PaymentGateway for UnreachableGateway {
		async fn create_intent(
			&self,
			spec: IntentSpec,
		) -> Result<PaymentIntent, GatewayError> {
			panic!("gateway must not be called, got {spec:?}");
		}
	}

	fn use_case_with(policy: IntentPolicy) -> CreatePaymentIntentUseCase {
		CreatePaymentIntentUseCase::new(Arc::new(UnreachableGateway), policy)
	}

	#[tokio::test]
	async fn test_missing_amount_is_rejected_before_the_gateway() {
		let use_case = use_case_with(IntentPolicy::default());
		let command = CreatePaymentIntentCommand {
			currency: Some("gbp".to_string()),
			..Default::default()
		};

		let err = use_case.execute(command).await.unwrap_err();
		assert_eq!(err.to_string(), "Amount and currency are required");
	}

	#[tokio::test]
	async fn test_missing_currency_is_rejected_before_the_gateway() {
		let use_case = use_case_with(IntentPolicy::default());
		let command = CreatePaymentIntentCommand {
			amount: Some(1000),
			..Default::default()
		};

		let err = use_case.execute(command).await.unwrap_err();
		assert_eq!(err.to_string(), "Amount and currency are required");
	}

	#[tokio::test]
	async fn test_non_positive_amount_is_rejected() {
		let use_case = use_case_with(IntentPolicy::default());
		let command = CreatePaymentIntentCommand {
			amount: Some(0),
			currency: Some("gbp".to_string()),
			..Default::default()
		};

		let err = use_case.execute(command).await.unwrap_err();
		assert!(matches!(err, CreatePaymentIntentError::Validation { .. }));
	}

	#[tokio::test]
	async fn test_restricted_currency_mismatch_is_rejected() {
		let use_case = use_case_with(IntentPolicy {
			restricted_currency: Some("gbp".to_string()),
			..Default::default()
		});
		let command = CreatePaymentIntentCommand {
			amount: Some(1000),
			currency: Some("usd".to_string()),
			..Default::default()
		};

		let err = use_case.execute(command).await.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Unsupported currency 'usd'. Only GBP payments are accepted."
		);
	}
}
