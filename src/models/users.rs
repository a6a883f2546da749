use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct User {
	pub id: Uuid,
	pub name: String,
	pub email: String,
	pub password: String,
	pub role: String,
	#[serde(rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(rename = "updatedAt")]
	pub updated_at: Option<DateTime<Utc>>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilteredUser {
	pub id: String,
	pub name: String,
	pub email: String,
	pub role: String,
	#[serde(rename = "createdAt")]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(rename = "updatedAt")]
	pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, sqlx::FromRow)]
pub struct UserRole {
	pub role: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenClaims {
	pub sub: String,
	pub iat: usize,
	pub exp: usize,
}

#[derive(Debug, Deserialize)]
pub struct RegisterUserSchema {
	pub name: String,
	pub email: String,
	pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginUserSchema {
	pub email: String,
	pub password: String,
}
