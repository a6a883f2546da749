use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Review {
	pub review_id: Uuid,
	pub user_id: Uuid,
	pub product_id: Uuid,
	pub rating: i32,
	pub title: String,
	pub comment: String,
	pub images: Vec<String>,
	pub is_verified: bool,
	pub helpful_count: i32,
	pub is_approved: bool,
	pub admin_notes: Option<String>,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
	#[serde(rename = "updatedTs")]
	pub updated_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateReviewSchema {
	pub product_id: Uuid,
	pub rating: i32,
	pub title: String,
	pub comment: String,
	#[serde(default)]
	pub images: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApproveSchema {
	pub is_approved: bool,
	pub admin_notes: Option<String>,
}

// отзыв с именем автора для публичной выдачи
#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct ReviewWithAuthor {
	pub review_id: Uuid,
	pub product_id: Uuid,
	pub rating: i32,
	pub title: String,
	pub comment: String,
	pub images: Vec<String>,
	pub is_verified: bool,
	pub helpful_count: i32,
	pub author_name: String,
	pub created_ts: Option<DateTime<Utc>>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilteredReview {
	pub review_id: String,
	pub product_id: String,
	pub rating: i32,
	pub title: String,
	pub comment: String,
	pub images: Vec<String>,
	pub is_verified: bool,
	pub helpful_count: i32,
	pub author_name: String,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct PendingReview {
	pub review_id: Uuid,
	pub product_id: Uuid,
	pub rating: i32,
	pub title: String,
	pub comment: String,
	pub images: Vec<String>,
	pub admin_notes: Option<String>,
	pub author_name: String,
	pub author_email: String,
	pub product_name: Option<String>,
	pub product_brand: Option<String>,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct RatingBucket {
	pub rating: i32,
	pub count: Option<i64>,
}

#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct RatingTotals {
	pub total: Option<i64>,
	pub count: Option<i64>,
}
