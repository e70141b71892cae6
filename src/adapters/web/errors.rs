use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
	error: String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{reason}")]
	BadClientData { reason: String },
	#[display("{reason}")]
	Gateway { reason: String },
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				error: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientData { .. } => StatusCode::BAD_REQUEST,
			ApiError::Gateway { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
