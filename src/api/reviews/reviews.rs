use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
	api::CustomError,
	models::{CreateReviewSchema, RatingBucket, Review, ReviewWithAuthor},
};

// загрузкой занимается отдельный сервис, сюда приходят уже сохранённые пути
const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

pub fn validate_new_review(body: &CreateReviewSchema) -> Result<(), CustomError> {
	if !(1..=5).contains(&body.rating) {
		return Err(CustomError::Validation(
			"Оценка должна быть от 1 до 5".to_string(),
		));
	}

	if body.title.trim().is_empty() {
		return Err(CustomError::Validation(
			"Заголовок отзыва не может быть пустым".to_string(),
		));
	}

	if body.comment.trim().is_empty() {
		return Err(CustomError::Validation(
			"Текст отзыва не может быть пустым".to_string(),
		));
	}

	for image in &body.images {
		validate_image_path(image)?;
	}

	Ok(())
}

pub fn validate_image_path(path: &str) -> Result<(), CustomError> {
	let extension = path.rsplit('.').next().unwrap_or("").to_lowercase();

	if path.contains('.') && ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
		Ok(())
	} else {
		Err(CustomError::Upload(format!(
			"Файл {} не является изображением",
			path
		)))
	}
}

pub fn fold_histogram(buckets: &[RatingBucket]) -> [i64; 5] {
	let mut histogram = [0i64; 5];

	for bucket in buckets {
		if (1..=5).contains(&bucket.rating) {
			histogram[(bucket.rating - 1) as usize] = bucket.count.unwrap_or(0);
		}
	}

	histogram
}

impl Review {
	pub async fn create(
		db: &Pool<Postgres>,
		user_id: &Uuid,
		body: &CreateReviewSchema,
	) -> Result<Review, CustomError> {
		validate_new_review(body)?;

		let product = sqlx::query("SELECT product_id FROM products WHERE product_id = $1")
			.bind(body.product_id)
			.fetch_optional(db)
			.await?;

		if product.is_none() {
			return Err(CustomError::NotFound("Товар не найден".to_string()));
		}

		let query_result = sqlx::query_as::<_, Review>(
			"INSERT INTO reviews (user_id, product_id, rating, title, comment, images)
			VALUES ($1, $2, $3, $4, $5, $6)
			RETURNING *",
		)
		.bind(user_id)
		.bind(body.product_id)
		.bind(body.rating)
		.bind(&body.title)
		.bind(&body.comment)
		.bind(&body.images)
		.fetch_one(db)
		.await;

		match query_result {
			Ok(review) => Ok(review),
			// уникальность пары (user_id, product_id) держит констрейнт в базе,
			// проверка до вставки оставляла бы гонку
			Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
				Err(CustomError::DuplicateReview)
			}
			Err(err) => Err(CustomError::Database(err)),
		}
	}

	pub async fn approved_for_product(
		db: &Pool<Postgres>,
		product_id: &Uuid,
		limit: usize,
		offset: usize,
	) -> Result<Vec<ReviewWithAuthor>, CustomError> {
		let reviews = sqlx::query_as::<_, ReviewWithAuthor>(
			"SELECT r.review_id, r.product_id, r.rating, r.title, r.comment, r.images,
				r.is_verified, r.helpful_count, u.name AS author_name, r.created_ts
			FROM reviews r
			JOIN users u ON u.id = r.user_id
			WHERE r.product_id = $1 AND r.is_approved = TRUE
			ORDER BY r.created_ts DESC
			LIMIT $2 OFFSET $3",
		)
		.bind(product_id)
		.bind(limit as i64)
		.bind(offset as i64)
		.fetch_all(db)
		.await?;

		Ok(reviews)
	}

	pub async fn rating_histogram(
		db: &Pool<Postgres>,
		product_id: &Uuid,
	) -> Result<[i64; 5], CustomError> {
		let buckets = sqlx::query_as::<_, RatingBucket>(
			"SELECT rating, count(*) AS count
			FROM reviews
			WHERE product_id = $1 AND is_approved = TRUE
			GROUP BY rating",
		)
		.bind(product_id)
		.fetch_all(db)
		.await?;

		Ok(fold_histogram(&buckets))
	}

	pub async fn mark_helpful(db: &Pool<Postgres>, review_id: &Uuid) -> Result<Review, CustomError> {
		let review = sqlx::query_as::<_, Review>(
			"UPDATE reviews SET helpful_count = helpful_count + 1
			WHERE review_id = $1 AND is_approved = TRUE
			RETURNING *",
		)
		.bind(review_id)
		.fetch_optional(db)
		.await?;

		review.ok_or_else(|| CustomError::NotFound("Отзыв не найден".to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn review_body(rating: i32) -> CreateReviewSchema {
		CreateReviewSchema {
			product_id: Uuid::new_v4(),
			rating,
			title: "Отличный товар".to_string(),
			comment: "Пользуюсь месяц, всё устраивает".to_string(),
			images: vec![],
		}
	}

	#[test]
	fn accepts_valid_review() {
		assert!(validate_new_review(&review_body(5)).is_ok());
		assert!(validate_new_review(&review_body(1)).is_ok());
	}

	#[test]
	fn rejects_rating_out_of_range() {
		assert!(matches!(
			validate_new_review(&review_body(0)),
			Err(CustomError::Validation(_))
		));
		assert!(matches!(
			validate_new_review(&review_body(6)),
			Err(CustomError::Validation(_))
		));
	}

	#[test]
	fn rejects_empty_title_and_comment() {
		let mut body = review_body(4);
		body.title = "  ".to_string();
		assert!(matches!(
			validate_new_review(&body),
			Err(CustomError::Validation(_))
		));

		let mut body = review_body(4);
		body.comment = "".to_string();
		assert!(matches!(
			validate_new_review(&body),
			Err(CustomError::Validation(_))
		));
	}

	#[test]
	fn rejects_non_image_attachments() {
		let mut body = review_body(4);
		body.images = vec!["uploads/reviews/photo.jpg".to_string(), "uploads/reviews/readme.pdf".to_string()];
		assert!(matches!(
			validate_new_review(&body),
			Err(CustomError::Upload(_))
		));
	}

	#[test]
	fn image_extension_check_ignores_case() {
		assert!(validate_image_path("uploads/reviews/photo.JPG").is_ok());
		assert!(validate_image_path("uploads/reviews/photo.WebP").is_ok());
		assert!(validate_image_path("uploads/reviews/archive").is_err());
	}

	#[test]
	fn folds_buckets_into_fixed_histogram() {
		let buckets = vec![
			RatingBucket { rating: 5, count: Some(7) },
			RatingBucket { rating: 3, count: Some(2) },
		];
		assert_eq!(fold_histogram(&buckets), [0, 0, 2, 0, 7]);
	}

	#[test]
	fn histogram_is_empty_without_buckets() {
		assert_eq!(fold_histogram(&[]), [0, 0, 0, 0, 0]);
	}
}
