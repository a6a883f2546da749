use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
	api::{validate_image_path, CustomError},
	models::{CreateGalleryImageSchema, GalleryImageWithAuthor, UserGalleryImage},
};

impl UserGalleryImage {
	// в отличие от отзывов, несколько фотографий на пару (автор, товар) разрешены
	pub async fn create(
		db: &Pool<Postgres>,
		user_id: &Uuid,
		body: &CreateGalleryImageSchema,
	) -> Result<UserGalleryImage, CustomError> {
		validate_image_path(&body.image)?;

		let product = sqlx::query("SELECT product_id FROM products WHERE product_id = $1")
			.bind(body.product_id)
			.fetch_optional(db)
			.await?;

		if product.is_none() {
			return Err(CustomError::NotFound("Товар не найден".to_string()));
		}

		let image = sqlx::query_as::<_, UserGalleryImage>(
			"INSERT INTO user_gallery_images (user_id, product_id, image, caption)
			VALUES ($1, $2, $3, $4)
			RETURNING *",
		)
		.bind(user_id)
		.bind(body.product_id)
		.bind(&body.image)
		.bind(&body.caption)
		.fetch_one(db)
		.await?;

		Ok(image)
	}

	pub async fn approved_for_product(
		db: &Pool<Postgres>,
		product_id: &Uuid,
	) -> Result<Vec<GalleryImageWithAuthor>, CustomError> {
		let images = sqlx::query_as::<_, GalleryImageWithAuthor>(
			"SELECT g.img_id, g.product_id, g.image, g.caption, u.name AS author_name, g.created_ts
			FROM user_gallery_images g
			JOIN users u ON u.id = g.user_id
			WHERE g.product_id = $1 AND g.is_approved = TRUE
			ORDER BY g.created_ts DESC",
		)
		.bind(product_id)
		.fetch_all(db)
		.await?;

		Ok(images)
	}
}
