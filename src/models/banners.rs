use std::str::FromStr;

use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Закрытый список рекламных областей витрины. Строки вне списка
/// отклоняются при записи, а не молча сохраняются.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BannerArea {
	HeroSlider,
	HomeMiddle,
	HomeBottom,
	CategoryTop,
	ProductSidebar,
}

impl BannerArea {
	pub fn as_str(&self) -> &'static str {
		match self {
			BannerArea::HeroSlider => "hero-slider",
			BannerArea::HomeMiddle => "home-middle",
			BannerArea::HomeBottom => "home-bottom",
			BannerArea::CategoryTop => "category-top",
			BannerArea::ProductSidebar => "product-sidebar",
		}
	}
}

impl FromStr for BannerArea {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"hero-slider" => Ok(BannerArea::HeroSlider),
			"home-middle" => Ok(BannerArea::HomeMiddle),
			"home-bottom" => Ok(BannerArea::HomeBottom),
			"category-top" => Ok(BannerArea::CategoryTop),
			"product-sidebar" => Ok(BannerArea::ProductSidebar),
			_ => Err(()),
		}
	}
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, sqlx::FromRow, Serialize, Clone)]
pub struct Banner {
	pub banner_id: Uuid,
	pub name: String,
	pub area: String,
	pub position: Option<String>,
	pub heading: Option<String>,
	pub subheading: Option<String>,
	pub description: Option<String>,
	pub image: String,
	pub mobile_image: Option<String>,
	pub link: Option<String>,
	pub button_text: Option<String>,
	pub text_color: Option<String>,
	pub overlay_opacity: Option<f64>,
	pub text_align: Option<String>,
	pub is_active: bool,
	pub sort_order: i32,
	pub clicks: i64,
	pub starts_at: Option<DateTime<Utc>>,
	pub ends_at: Option<DateTime<Utc>>,
	#[serde(rename = "createdTs")]
	pub created_ts: Option<DateTime<Utc>>,
	#[serde(rename = "updatedTs")]
	pub updated_ts: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SaveBannerSchema {
	pub name: String,
	pub area: String,
	pub position: Option<String>,
	pub heading: Option<String>,
	pub subheading: Option<String>,
	pub description: Option<String>,
	pub image: String,
	pub mobile_image: Option<String>,
	pub link: Option<String>,
	pub button_text: Option<String>,
	pub text_color: Option<String>,
	pub overlay_opacity: Option<f64>,
	pub text_align: Option<String>,
	#[serde(default = "default_is_active")]
	pub is_active: bool,
	#[serde(default)]
	pub sort_order: i32,
	pub starts_at: Option<DateTime<Utc>>,
	pub ends_at: Option<DateTime<Utc>>,
}

fn default_is_active() -> bool {
	true
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FilteredBanner {
	pub banner_id: String,
	pub name: String,
	pub area: String,
	pub position: Option<String>,
	pub heading: Option<String>,
	pub subheading: Option<String>,
	pub description: Option<String>,
	pub image: String,
	pub mobile_image: Option<String>,
	pub link: Option<String>,
	pub button_text: Option<String>,
	pub text_color: Option<String>,
	pub overlay_opacity: Option<f64>,
	pub text_align: Option<String>,
	pub sort_order: i32,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_every_known_area() {
		for s in [
			"hero-slider",
			"home-middle",
			"home-bottom",
			"category-top",
			"product-sidebar",
		] {
			let area = BannerArea::from_str(s).unwrap();
			assert_eq!(area.as_str(), s);
		}
	}

	#[test]
	fn rejects_unknown_area() {
		assert!(BannerArea::from_str("hero_slider").is_err());
		assert!(BannerArea::from_str("sidebar").is_err());
		assert!(BannerArea::from_str("").is_err());
	}

	#[test]
	fn serializes_in_kebab_case() {
		let json = serde_json::to_string(&BannerArea::HeroSlider).unwrap();
		assert_eq!(json, "\"hero-slider\"");
	}

	#[test]
	fn new_banner_is_active_by_default() {
		let body: SaveBannerSchema = serde_json::from_str(
			r#"{"name": "Летняя распродажа", "area": "hero-slider", "image": "uploads/banners/summer.webp"}"#,
		)
		.unwrap();

		assert!(body.is_active);
		assert_eq!(body.sort_order, 0);
		assert!(body.position.is_none());
		assert!(body.starts_at.is_none());
	}
}
