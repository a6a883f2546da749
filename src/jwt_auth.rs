use core::fmt;
use std::future::{ready, Ready};

use actix_web::error::ErrorUnauthorized;
use actix_web::{dev::Payload, http, web, Error as ActixWebError};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Serialize;

use crate::models::TokenClaims;
use crate::AppState;

#[derive(Debug, Serialize)]
struct ErrorResponse {
	status: String,
	message: String,
}

impl fmt::Display for ErrorResponse {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", serde_json::to_string(&self).unwrap())
	}
}

pub struct JwtMiddleware {
	pub user_id: uuid::Uuid,
}

impl FromRequest for JwtMiddleware {
	type Error = ActixWebError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
		let data = req.app_data::<web::Data<AppState>>().unwrap();

		let token = req
			.cookie("token")
			.map(|c| c.value().to_string())
			.or_else(|| {
				req.headers()
					.get(http::header::AUTHORIZATION)
					.and_then(|header| header.to_str().ok())
					.and_then(|header| header.strip_prefix("Bearer "))
					.map(|header| header.to_string())
			});

		if token.is_none() {
			let json_error = ErrorResponse {
				status: "fail".to_string(),
				message: "Вы не авторизованы, пожалуйста, войдите".to_string(),
			};
			return ready(Err(ErrorUnauthorized(json_error)));
		}

		let claims = match decode::<TokenClaims>(
			&token.unwrap(),
			&DecodingKey::from_secret(data.env.jwt_secret.as_ref()),
			&Validation::default(),
		) {
			Ok(c) => c.claims,
			Err(_) => {
				let json_error = ErrorResponse {
					status: "fail".to_string(),
					message: "Недействительный токен".to_string(),
				};
				return ready(Err(ErrorUnauthorized(json_error)));
			}
		};

		let user_id = match uuid::Uuid::parse_str(claims.sub.as_str()) {
			Ok(user_id) => user_id,
			Err(_) => {
				let json_error = ErrorResponse {
					status: "fail".to_string(),
					message: "Недействительный токен".to_string(),
				};
				return ready(Err(ErrorUnauthorized(json_error)));
			}
		};

		req.extensions_mut().insert::<uuid::Uuid>(user_id.to_owned());

		ready(Ok(JwtMiddleware { user_id }))
	}
}
