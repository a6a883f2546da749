use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Product {
	pub product_id: Uuid,
	pub category_id: Uuid,
	pub name: Option<String>,
	pub brand: Option<String>,
	pub description: Option<String>,
	pub price: i64,
	pub avg_rating: f64,
	pub review_count: i32,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
	#[serde(rename = "updatedTs")]
	pub updated_ts: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Debug, sqlx::FromRow)]
pub struct ProductsCount {
	pub count: Option<i64>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilteredProduct {
	pub product_id: String,
	pub category_id: String,
	pub name: Option<String>,
	pub brand: Option<String>,
	pub description: Option<String>,
	pub price: i64,
	pub avg_rating: f64,
	pub review_count: i32,
}

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct ProductRating {
	pub avg_rating: f64,
	pub review_count: i32,
}
