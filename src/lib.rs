use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use log::info;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::health_handler::{ServiceStatus, health};
use crate::adapters::web::payment_intent_handler::create_payment_intent;
use crate::adapters::web::webhook_handler::webhook;
use crate::config::Config;
use crate::domain::payment::IntentPolicy;
use crate::infrastructure::stripe::client::StripeGateway;
use crate::infrastructure::stripe::signature::WebhookVerifier;
use crate::use_cases::create_payment_intent::CreatePaymentIntentUseCase;
use crate::use_cases::handle_webhook_event::HandleWebhookEventUseCase;

/// Open policy when no origins are configured, otherwise an explicit
/// origin list with a method/header allow-list.
fn build_cors(origins: &[String]) -> Cors {
	if origins.is_empty() {
		return Cors::default()
			.allow_any_origin()
			.allow_any_method()
			.allow_any_header();
	}

	let mut cors = Cors::default();
	for origin in origins {
		cors = cors.allowed_origin(origin);
	}
	cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
		.allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
		.max_age(3600)
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let gateway = Arc::new(StripeGateway::new(
		config.stripe_secret_key.clone(),
		config.stripe_api_base_url.clone(),
	));
	let policy = IntentPolicy {
		restricted_currency: config.restricted_currency.clone(),
		statement_descriptor_suffix: config.statement_descriptor_suffix.clone(),
	};
	let create_intent_use_case =
		CreatePaymentIntentUseCase::new(gateway, policy);
	let handle_event_use_case = HandleWebhookEventUseCase::new();
	let verifier = WebhookVerifier::new(config.stripe_webhook_secret.clone());
	let status = ServiceStatus {
		message:  "Trader Brothers Payment Backend".to_string(),
		currency: config
			.restricted_currency
			.as_deref()
			.map(str::to_uppercase),
		region:   config.region_label.clone(),
	};
	let cors_origins = config.cors_origins();

	info!("Starting payment server on 0.0.0.0:{}", config.server_port);
	info!("Environment: {}", config.environment);
	info!("Stripe: configured");
	info!(
		"Webhook secret: {}",
		if config.stripe_webhook_secret.is_some() {
			"configured"
		} else {
			"not configured, deliveries will be rejected"
		}
	);
	info!(
		"CORS: {}",
		if cors_origins.is_empty() {
			"any origin".to_string()
		} else {
			cors_origins.join(", ")
		}
	);

	let server_port = config.server_port;
	let server_keepalive = config.server_keepalive;

	HttpServer::new(move || {
		App::new()
			.wrap(build_cors(&cors_origins))
			.app_data(web::Data::new(create_intent_use_case.clone()))
			.app_data(web::Data::new(handle_event_use_case.clone()))
			.app_data(web::Data::new(verifier.clone()))
			.app_data(web::Data::new(status.clone()))
			.service(health)
			.service(create_payment_intent)
			.service(webhook)
	})
	.keep_alive(Duration::from_secs(server_keepalive))
	.bind(("0.0.0.0", server_port))?
	.run()
	.await
}
