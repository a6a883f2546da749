use actix_web::cookie::{time::Duration as ActixWebDuration, Cookie};
use actix_web::{post, web, HttpResponse, Responder};
use argon2::{Argon2, PasswordHash, PasswordVerifier};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::{
	models::{LoginUserSchema, TokenClaims, User},
	AppState,
};

#[post("/auth/login")]
pub async fn login_user_handler(
	body: web::Json<LoginUserSchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let query_result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
		.bind(body.email.to_owned().to_lowercase())
		.fetch_optional(&data.db)
		.await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения users";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let user = query_result.unwrap();

	let is_valid = user.to_owned().map_or(false, |user| {
		PasswordHash::new(&user.password)
			.map_or(false, |parsed_hash| {
				Argon2::default()
					.verify_password(body.password.as_bytes(), &parsed_hash)
					.is_ok()
			})
	});

	if !is_valid {
		return HttpResponse::BadRequest()
			.json(json!({"status": "fail", "message": "Неверный email или пароль"}));
	}

	let user = user.unwrap();

	let now = Utc::now();
	let iat = now.timestamp() as usize;
	let exp = (now + Duration::minutes(data.env.jwt_maxage)).timestamp() as usize;
	let claims = TokenClaims {
		sub: user.id.to_string(),
		exp,
		iat,
	};

	let token = encode(
		&Header::default(),
		&claims,
		&EncodingKey::from_secret(data.env.jwt_secret.as_ref()),
	)
	.unwrap();

	let cookie = Cookie::build("token", token.to_owned())
		.path("/")
		.max_age(ActixWebDuration::new(60 * data.env.jwt_maxage, 0))
		.http_only(true)
		.finish();

	HttpResponse::Ok()
		.cookie(cookie)
		.json(json!({"status": "success", "token": token}))
}

#[cfg(test)]
mod tests {
	use chrono::{Duration, Utc};
	use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

	use crate::models::TokenClaims;

	#[test]
	fn token_round_trip() {
		let now = Utc::now();
		let claims = TokenClaims {
			sub: "b6c5cbd4-2f44-41da-b878-0eca98ba23a5".to_string(),
			iat: now.timestamp() as usize,
			exp: (now + Duration::minutes(60)).timestamp() as usize,
		};

		let token = encode(
			&Header::default(),
			&claims,
			&EncodingKey::from_secret(b"test-secret"),
		)
		.unwrap();

		let decoded = decode::<TokenClaims>(
			&token,
			&DecodingKey::from_secret(b"test-secret"),
			&Validation::default(),
		)
		.unwrap();

		assert_eq!(decoded.claims.sub, claims.sub);
	}

	#[test]
	fn rejects_token_signed_with_other_secret() {
		let now = Utc::now();
		let claims = TokenClaims {
			sub: "b6c5cbd4-2f44-41da-b878-0eca98ba23a5".to_string(),
			iat: now.timestamp() as usize,
			exp: (now + Duration::minutes(60)).timestamp() as usize,
		};

		let token = encode(
			&Header::default(),
			&claims,
			&EncodingKey::from_secret(b"test-secret"),
		)
		.unwrap();

		assert!(decode::<TokenClaims>(
			&token,
			&DecodingKey::from_secret(b"another-secret"),
			&Validation::default(),
		)
		.is_err());
	}
}
