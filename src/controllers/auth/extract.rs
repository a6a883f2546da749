use actix_web::dev::ServiceRequest;
use actix_web::{http, web};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{
	models::{TokenClaims, UserRole},
	AppState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
	User,
	Admin,
}

// роли достаются из базы по токену; без токена запрос идёт дальше
// без ролей и отсекается только на защищённых маршрутах
pub async fn extract(req: &ServiceRequest) -> Result<Vec<Role>, actix_web::Error> {
	let data = match req.app_data::<web::Data<AppState>>() {
		Some(data) => data,
		None => return Ok(vec![]),
	};

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

	let token = match token {
		Some(token) => token,
		None => return Ok(vec![]),
	};

	let claims = match decode::<TokenClaims>(
		&token,
		&DecodingKey::from_secret(data.env.jwt_secret.as_ref()),
		&Validation::default(),
	) {
		Ok(token_data) => token_data.claims,
		Err(_) => return Ok(vec![]),
	};

	let user_id = match uuid::Uuid::parse_str(claims.sub.as_str()) {
		Ok(user_id) => user_id,
		Err(_) => return Ok(vec![]),
	};

	let query_result = sqlx::query_as::<_, UserRole>("SELECT role FROM users WHERE id = $1")
		.bind(user_id)
		.fetch_optional(&data.db)
		.await;

	match query_result {
		Ok(Some(user_role)) if user_role.role == "admin" => Ok(vec![Role::Admin, Role::User]),
		Ok(Some(_)) => Ok(vec![Role::User]),
		_ => Ok(vec![]),
	}
}
