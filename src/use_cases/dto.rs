/// Raw creation request as received from the front-end. Required fields are
/// optional here so their absence is reported as a validation error with a
/// descriptive message rather than a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct CreatePaymentIntentCommand {
	pub amount:         Option<i64>,
	pub currency:       Option<String>,
	pub invoice_number: Option<String>,
	pub customer_email: Option<String>,
	pub customer_name:  Option<String>,
}
