/// A fully validated order for creating a provider transaction.
///
/// Amounts are integers in the smallest currency unit (pence for GBP) and
/// the currency code is lowercased before it reaches the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentSpec {
	pub amount:   i64,
	pub currency: String,
	pub invoice_number: Option<String>,
	pub customer_name:  Option<String>,
	pub receipt_email:  Option<String>,
	pub description:    Option<String>,
	pub statement_descriptor_suffix: Option<String>,
}

/// The slice of the provider's PaymentIntent this service observes: the
/// identifier and the one-time client secret handed back to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntent {
	pub id:            String,
	pub client_secret: String,
}

/// Per-deployment rules applied when building an [`IntentSpec`].
#[derive(Debug, Clone, Default)]
pub struct IntentPolicy {
	/// When set, requests must carry this currency (case-insensitive).
	pub restricted_currency: Option<String>,
	/// Short text appended to the cardholder's statement line.
	pub statement_descriptor_suffix: Option<String>,
}
