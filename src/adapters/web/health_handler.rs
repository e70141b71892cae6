use actix_web::{HttpResponse, Responder, get, web};
use chrono::{SecondsFormat, Utc};

use crate::adapters::web::schema::HealthResponse;

/// Static service descriptor reported by `GET /`. Built once at startup
/// from configuration; only the timestamp varies between calls.
#[derive(Debug, Clone)]
pub struct ServiceStatus {
	pub message:  String,
	pub currency: Option<String>,
	pub region:   Option<String>,
}

#[get("/")]
pub async fn health(status: web::Data<ServiceStatus>) -> impl Responder {
	HttpResponse::Ok().json(HealthResponse {
		status:    "Server is running".to_string(),
		message:   status.message.clone(),
		timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
		currency:  status.currency.clone(),
		region:    status.region.clone(),
	})
}
