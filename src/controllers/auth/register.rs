use actix_web::{post, web, HttpResponse, Responder};
use argon2::{password_hash::SaltString, Argon2, PasswordHasher};
use rand_core::OsRng;
use serde_json::json;

use crate::{
	models::{Count, RegisterUserSchema, User},
	utils::filter_user_record,
	AppState,
};

#[post("/auth/register")]
pub async fn register_user_handler(
	body: web::Json<RegisterUserSchema>,
	data: web::Data<AppState>,
) -> impl Responder {
	let exists_query_result =
		sqlx::query_as::<_, Count>("SELECT count(*) AS count FROM users WHERE email = $1")
			.bind(body.email.to_owned().to_lowercase())
			.fetch_one(&data.db)
			.await;

	if let Ok(exists) = &exists_query_result {
		if exists.count.unwrap_or(0) > 0 {
			return HttpResponse::Conflict().json(
				json!({"status": "fail","message": "Пользователь с таким email уже существует"}),
			);
		}
	}

	let salt = SaltString::generate(&mut OsRng);
	let hashed_password = Argon2::default()
		.hash_password(body.password.as_bytes(), &salt)
		.expect("Error while hashing password")
		.to_string();

	let query_result = sqlx::query_as::<_, User>(
		"INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING *",
	)
	.bind(body.name.to_string())
	.bind(body.email.to_string().to_lowercase())
	.bind(hashed_password)
	.fetch_one(&data.db)
	.await;

	match query_result {
		Ok(user) => HttpResponse::Ok().json(json!({
			"status": "success",
			"data": json!({
				"user": filter_user_record(&user)
			})
		})),
		Err(err) => HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": format!("{:?}", err)})),
	}
}

#[cfg(test)]
mod tests {
	use argon2::{
		password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
	};
	use rand_core::OsRng;

	#[test]
	fn password_hash_round_trip() {
		let salt = SaltString::generate(&mut OsRng);
		let hash = Argon2::default()
			.hash_password(b"correct horse battery staple", &salt)
			.unwrap()
			.to_string();

		let parsed_hash = PasswordHash::new(&hash).unwrap();
		assert!(Argon2::default()
			.verify_password(b"correct horse battery staple", &parsed_hash)
			.is_ok());
		assert!(Argon2::default()
			.verify_password(b"wrong password", &parsed_hash)
			.is_err());
	}
}
