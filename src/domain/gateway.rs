use async_trait::async_trait;
use derive_more::derive::{Display, Error};

use crate::domain::payment::{IntentSpec, PaymentIntent};

#[derive(Debug, Display, Error)]
pub enum GatewayError {
	/// The provider answered with an error; its message is safe to surface.
	#[display("{message}")]
	Api { message: String },
	/// The provider could not be reached or returned an unreadable body.
	#[display("could not reach the payment provider: {message}")]
	Transport { message: String },
}

/// Port to the external payment provider. The production implementation is
/// [`crate::infrastructure::stripe::client::StripeGateway`]; tests substitute
/// a recording double.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn create_intent(
		&self,
		spec: IntentSpec,
	) -> Result<PaymentIntent, GatewayError>;
}
