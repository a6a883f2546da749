use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
	api::{recompute_product_rating, CustomError},
	models::{
		ApproveSchema, PendingGalleryImage, PendingReview, ProductRating, Review, UserGalleryImage,
	},
};

impl PendingReview {
	pub async fn list(db: &Pool<Postgres>) -> Result<Vec<PendingReview>, CustomError> {
		let reviews = sqlx::query_as::<_, PendingReview>(
			"SELECT r.review_id, r.product_id, r.rating, r.title, r.comment, r.images,
				r.admin_notes, u.name AS author_name, u.email AS author_email,
				p.name AS product_name, p.brand AS product_brand, r.created_ts
			FROM reviews r
			JOIN users u ON u.id = r.user_id
			JOIN products p ON p.product_id = r.product_id
			WHERE r.is_approved = FALSE
			ORDER BY r.created_ts DESC",
		)
		.fetch_all(db)
		.await?;

		Ok(reviews)
	}
}

impl PendingGalleryImage {
	pub async fn list(db: &Pool<Postgres>) -> Result<Vec<PendingGalleryImage>, CustomError> {
		let images = sqlx::query_as::<_, PendingGalleryImage>(
			"SELECT g.img_id, g.product_id, g.image, g.caption, g.admin_notes,
				u.name AS author_name, u.email AS author_email,
				p.name AS product_name, p.brand AS product_brand, g.created_ts
			FROM user_gallery_images g
			JOIN users u ON u.id = g.user_id
			JOIN products p ON p.product_id = g.product_id
			WHERE g.is_approved = FALSE
			ORDER BY g.created_ts DESC",
		)
		.fetch_all(db)
		.await?;

		Ok(images)
	}
}

impl Review {
	/// Решение модератора: флаг и заметка пишутся как есть, кеш рейтинга
	/// товара пересчитывается в той же транзакции. Пересчёт идёт и при
	/// отклонении: снятие ранее одобренного отзыва тоже меняет среднее.
	pub async fn decide(
		db: &Pool<Postgres>,
		review_id: &Uuid,
		decision: &ApproveSchema,
	) -> Result<(Review, ProductRating), CustomError> {
		let mut tx = db.begin().await?;

		let review = sqlx::query_as::<_, Review>(
			"UPDATE reviews SET is_approved = $1, admin_notes = $2, updated_ts = NOW()
			WHERE review_id = $3
			RETURNING *",
		)
		.bind(decision.is_approved)
		.bind(&decision.admin_notes)
		.bind(review_id)
		.fetch_optional(&mut *tx)
		.await?
		.ok_or_else(|| CustomError::NotFound("Отзыв не найден".to_string()))?;

		let rating = recompute_product_rating(&mut tx, &review.product_id).await?;

		tx.commit().await?;

		Ok((review, rating))
	}
}

impl UserGalleryImage {
	// фотографии не участвуют в рейтинге, пересчёта нет
	pub async fn decide(
		db: &Pool<Postgres>,
		img_id: &Uuid,
		decision: &ApproveSchema,
	) -> Result<UserGalleryImage, CustomError> {
		let image = sqlx::query_as::<_, UserGalleryImage>(
			"UPDATE user_gallery_images SET is_approved = $1, admin_notes = $2, updated_ts = NOW()
			WHERE img_id = $3
			RETURNING *",
		)
		.bind(decision.is_approved)
		.bind(&decision.admin_notes)
		.bind(img_id)
		.fetch_optional(db)
		.await?;

		image.ok_or_else(|| CustomError::NotFound("Фотография не найдена".to_string()))
	}
}
