use secrecy::SecretString;
use serde::Deserialize;

/// Runtime settings, sourced from `APP_*` environment variables.
///
/// The open and currency-restricted deployments are the same binary: set
/// `APP_RESTRICTED_CURRENCY` (and optionally `APP_REGION_LABEL`) to run the
/// restricted variant, and `APP_ALLOWED_ORIGINS` to replace the permissive
/// CORS policy with an explicit origin list.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_port: u16,
	pub environment: String,
	pub stripe_secret_key: SecretString,
	pub stripe_webhook_secret: Option<SecretString>,
	pub stripe_api_base_url: String,
	pub restricted_currency: Option<String>,
	pub region_label: Option<String>,
	pub statement_descriptor_suffix: Option<String>,
	pub allowed_origins: Option<String>,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_port", 3000)?
			.set_default("environment", "development")?
			.set_default("stripe_api_base_url", "https://api.stripe.com")?
			.set_default("server_keepalive", 75)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	/// Origins allowed by CORS; empty means any origin.
	pub fn cors_origins(&self) -> Vec<String> {
		self.allowed_origins
			.as_deref()
			.unwrap_or_default()
			.split(',')
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect()
	}
}
