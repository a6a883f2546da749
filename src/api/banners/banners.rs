use std::str::FromStr;

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
	api::CustomError,
	models::{Banner, BannerArea, SaveBannerSchema},
};

pub fn parse_banner_area(value: &str) -> Result<BannerArea, CustomError> {
	BannerArea::from_str(value).map_err(|_| {
		CustomError::Validation(format!("Неизвестная область баннера: {}", value))
	})
}

impl Banner {
	pub async fn active_for_area(
		db: &Pool<Postgres>,
		area: BannerArea,
		position: Option<&str>,
	) -> Result<Vec<Banner>, CustomError> {
		// порядок: sort_order, при равенстве решает порядок создания
		let banners = match position {
			Some(position) => {
				sqlx::query_as::<_, Banner>(
					"SELECT * FROM banners
					WHERE area = $1 AND position = $2 AND is_active = TRUE
						AND (starts_at IS NULL OR starts_at <= NOW())
						AND (ends_at IS NULL OR ends_at >= NOW())
					ORDER BY sort_order ASC, created_ts ASC",
				)
				.bind(area.as_str())
				.bind(position)
				.fetch_all(db)
				.await?
			}
			None => {
				sqlx::query_as::<_, Banner>(
					"SELECT * FROM banners
					WHERE area = $1 AND is_active = TRUE
						AND (starts_at IS NULL OR starts_at <= NOW())
						AND (ends_at IS NULL OR ends_at >= NOW())
					ORDER BY sort_order ASC, created_ts ASC",
				)
				.bind(area.as_str())
				.fetch_all(db)
				.await?
			}
		};

		Ok(banners)
	}

	pub async fn get(db: &Pool<Postgres>, banner_id: &Uuid) -> Result<Banner, CustomError> {
		let banner = sqlx::query_as::<_, Banner>("SELECT * FROM banners WHERE banner_id = $1")
			.bind(banner_id)
			.fetch_optional(db)
			.await?;

		banner.ok_or_else(|| CustomError::NotFound("Баннер не найден".to_string()))
	}

	pub async fn create(db: &Pool<Postgres>, body: &SaveBannerSchema) -> Result<Banner, CustomError> {
		let area = parse_banner_area(&body.area)?;

		let banner = sqlx::query_as::<_, Banner>(
			"INSERT INTO banners (name, area, position, heading, subheading, description,
				image, mobile_image, link, button_text, text_color, overlay_opacity,
				text_align, is_active, sort_order, starts_at, ends_at)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
			RETURNING *",
		)
		.bind(&body.name)
		.bind(area.as_str())
		.bind(&body.position)
		.bind(&body.heading)
		.bind(&body.subheading)
		.bind(&body.description)
		.bind(&body.image)
		.bind(&body.mobile_image)
		.bind(&body.link)
		.bind(&body.button_text)
		.bind(&body.text_color)
		.bind(body.overlay_opacity)
		.bind(&body.text_align)
		.bind(body.is_active)
		.bind(body.sort_order)
		.bind(body.starts_at)
		.bind(body.ends_at)
		.fetch_one(db)
		.await?;

		Ok(banner)
	}

	pub async fn update(
		db: &Pool<Postgres>,
		banner_id: &Uuid,
		body: &SaveBannerSchema,
	) -> Result<Banner, CustomError> {
		let area = parse_banner_area(&body.area)?;

		let banner = sqlx::query_as::<_, Banner>(
			"UPDATE banners SET name = $1, area = $2, position = $3, heading = $4,
				subheading = $5, description = $6, image = $7, mobile_image = $8,
				link = $9, button_text = $10, text_color = $11, overlay_opacity = $12,
				text_align = $13, is_active = $14, sort_order = $15, starts_at = $16,
				ends_at = $17, updated_ts = NOW()
			WHERE banner_id = $18
			RETURNING *",
		)
		.bind(&body.name)
		.bind(area.as_str())
		.bind(&body.position)
		.bind(&body.heading)
		.bind(&body.subheading)
		.bind(&body.description)
		.bind(&body.image)
		.bind(&body.mobile_image)
		.bind(&body.link)
		.bind(&body.button_text)
		.bind(&body.text_color)
		.bind(body.overlay_opacity)
		.bind(&body.text_align)
		.bind(body.is_active)
		.bind(body.sort_order)
		.bind(body.starts_at)
		.bind(body.ends_at)
		.bind(banner_id)
		.fetch_optional(db)
		.await?;

		banner.ok_or_else(|| CustomError::NotFound("Баннер не найден".to_string()))
	}

	pub async fn delete(db: &Pool<Postgres>, banner_id: &Uuid) -> Result<(), CustomError> {
		let query_result = sqlx::query("DELETE FROM banners WHERE banner_id = $1")
			.bind(banner_id)
			.execute(db)
			.await?;

		if query_result.rows_affected() == 0 {
			return Err(CustomError::NotFound("Баннер не найден".to_string()));
		}

		Ok(())
	}

	/// Счётчик кликов: ошибки не доходят до покупателя, только в лог.
	pub async fn record_click(db: &Pool<Postgres>, banner_id: &Uuid) {
		let query_result = sqlx::query("UPDATE banners SET clicks = clicks + 1 WHERE banner_id = $1")
			.bind(banner_id)
			.execute(db)
			.await;

		if let Err(err) = query_result {
			log::warn!("Не удалось записать клик по баннеру {}: {}", banner_id, err);
		}
	}
}
