use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domain::thought::commands::ValidationError;

pub type AnyError = dyn std::error::Error + Send + Sync + 'static;

/// Envelope shared by the write endpoints: `{ response, success }`.
#[derive(Debug, Serialize)]
pub struct ServiceResponse<T: Serialize> {
	pub response: T,
	pub success: bool,
}

impl<T: Serialize> ServiceResponse<T> {
	pub fn ok(response: T) -> Self {
		Self { response, success: true }
	}
}

#[derive(Debug)]
pub enum ServiceError {
	Validation(ValidationError),
	EntityNotFound,
	InvalidId(String),
	BadRequest(String),
	InvalidConfig(String),
	DatabaseError(Box<AnyError>),
	ServerError(Box<AnyError>),
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::Validation(_) | ServiceError::InvalidId(_) | ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ServiceError::EntityNotFound => StatusCode::NOT_FOUND,
			ServiceError::InvalidConfig(_) | ServiceError::DatabaseError(_) | ServiceError::ServerError(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	fn name(&self) -> &'static str {
		match self {
			ServiceError::Validation(_) => "ValidationError",
			ServiceError::EntityNotFound => "NotFound",
			ServiceError::InvalidId(_) => "CastError",
			ServiceError::BadRequest(_) => "BadRequest",
			ServiceError::InvalidConfig(_) => "InvalidConfig",
			ServiceError::DatabaseError(_) => "DatabaseError",
			ServiceError::ServerError(_) => "ServerError",
		}
	}
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::Validation(err) => write!(f, "{}", err),
			ServiceError::EntityNotFound => write!(f, "Not found"),
			ServiceError::InvalidId(id) => write!(f, "Cast to ObjectId failed for value \"{}\"", id),
			ServiceError::BadRequest(res) => write!(f, "{}", res),
			ServiceError::InvalidConfig(res) => write!(f, "{}", res),
			ServiceError::DatabaseError(res) => write!(f, "{}", res),
			ServiceError::ServerError(res) => write!(f, "{}", res),
		}
	}
}

impl std::error::Error for ServiceError {}

impl From<ValidationError> for ServiceError {
	fn from(value: ValidationError) -> Self {
		ServiceError::Validation(value)
	}
}

impl From<mongodb::error::Error> for ServiceError {
	fn from(value: mongodb::error::Error) -> Self {
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		let status = self.status_code();
		if status.is_server_error() {
			tracing::error!("{}: {}", self.name(), self);
		}

		let mut response = json!({
			"name": self.name(),
			"message": self.to_string(),
		});
		if let ServiceError::Validation(err) = &self {
			response["field"] = json!(err.field());
			response["kind"] = json!(err.kind());
		}

		(status, Json(json!({ "response": response, "success": false }))).into_response()
	}
}
