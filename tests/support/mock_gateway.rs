use std::sync::Mutex;

use async_trait::async_trait;
use payments_backend::domain::gateway::{GatewayError, PaymentGateway};
use payments_backend::domain::payment::{IntentSpec, PaymentIntent};

/// Test double for the provider: records every creation order and answers
/// with a fixed intent or a fixed API error.
pub struct RecordingGateway {
	calls:     Mutex<Vec<IntentSpec>>,
	fail_with: Option<String>,
}

impl RecordingGateway {
	pub fn succeeding() -> Self {
		Self {
			calls:     Mutex::new(Vec::new()),
			fail_with: None,
		}
	}

	pub fn failing(message: &str) -> Self {
		Self {
			calls:     Mutex::new(Vec::new()),
			fail_with: Some(message.to_string()),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.lock().unwrap().len()
	}

	pub fn single_call(&self) -> IntentSpec {
		let calls = self.calls.lock().unwrap();
		assert_eq!(calls.len(), 1, "expected exactly one gateway call");
		calls[0].clone()
	}
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
	async fn create_intent(
		&self,
		spec: IntentSpec,
	) -> Result<PaymentIntent, GatewayError> {
		self.calls.lock().unwrap().push(spec);

		match &self.fail_with {
			Some(message) => Err(GatewayError::Api {
				message: message.clone(),
			}),
			None => Ok(PaymentIntent {
				id:            "pi_test_123".to_string(),
				client_secret: "pi_test_123_secret_456".to_string(),
			}),
		}
	}
}
