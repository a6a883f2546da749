use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomError {
	#[error("{0}")]
	Validation(String),
	#[error("Вы уже оставили отзыв на этот товар")]
	DuplicateReview,
	#[error("{0}")]
	Conflict(String),
	#[error("{0}")]
	NotFound(String),
	#[error("{0}")]
	Upload(String),
	#[error(transparent)]
	Database(#[from] sqlx::Error),
}

impl ResponseError for CustomError {
	fn status_code(&self) -> StatusCode {
		match self {
			CustomError::Validation(_) | CustomError::DuplicateReview | CustomError::Upload(_) => {
				StatusCode::BAD_REQUEST
			}
			CustomError::Conflict(_) => StatusCode::CONFLICT,
			CustomError::NotFound(_) => StatusCode::NOT_FOUND,
			CustomError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = if self.status_code().is_server_error() {
			"error"
		} else {
			"fail"
		};

		HttpResponse::build(self.status_code())
			.json(json!({"status": status, "message": self.to_string()}))
	}
}
