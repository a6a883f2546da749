use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct UserGalleryImage {
	pub img_id: Uuid,
	pub user_id: Uuid,
	pub product_id: Uuid,
	pub image: String,
	pub caption: Option<String>,
	pub is_approved: bool,
	pub admin_notes: Option<String>,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
	#[serde(rename = "updatedTs")]
	pub updated_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateGalleryImageSchema {
	pub product_id: Uuid,
	pub image: String,
	pub caption: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilteredGalleryImage {
	pub img_id: String,
	pub product_id: String,
	pub image: String,
	pub caption: Option<String>,
	pub author_name: String,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct GalleryImageWithAuthor {
	pub img_id: Uuid,
	pub product_id: Uuid,
	pub image: String,
	pub caption: Option<String>,
	pub author_name: String,
	pub created_ts: Option<DateTime<Utc>>,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct PendingGalleryImage {
	pub img_id: Uuid,
	pub product_id: Uuid,
	pub image: String,
	pub caption: Option<String>,
	pub admin_notes: Option<String>,
	pub author_name: String,
	pub author_email: String,
	pub product_name: Option<String>,
	pub product_brand: Option<String>,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
}
