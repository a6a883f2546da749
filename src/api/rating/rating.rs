use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
	api::CustomError,
	models::{ProductRating, RatingTotals},
};

/// Среднее по одобренным отзывам, один знак после запятой,
/// половинки округляются вверх. Пустой набор даёт 0.
pub fn round_avg_rating(total: i64, count: i64) -> f64 {
	if count == 0 {
		return 0.0;
	}

	((total * 10) as f64 / count as f64).round() / 10.0
}

// Полный пересчёт, а не инкремент: кеш на products всегда сходится
// с текущим набором одобренных отзывов, какой бы ни была история.
pub async fn recompute_product_rating(
	tx: &mut Transaction<'_, Postgres>,
	product_id: &Uuid,
) -> Result<ProductRating, CustomError> {
	let totals = sqlx::query_as::<_, RatingTotals>(
		"SELECT SUM(rating) AS total, COUNT(*) AS count
		FROM reviews
		WHERE product_id = $1 AND is_approved = TRUE",
	)
	.bind(product_id)
	.fetch_one(&mut **tx)
	.await?;

	let review_count = totals.count.unwrap_or(0);
	let avg_rating = round_avg_rating(totals.total.unwrap_or(0), review_count);

	sqlx::query(
		"UPDATE products SET avg_rating = $1, review_count = $2, updated_ts = NOW()
		WHERE product_id = $3",
	)
	.bind(avg_rating)
	.bind(review_count as i32)
	.bind(product_id)
	.execute(&mut **tx)
	.await?;

	Ok(ProductRating {
		avg_rating,
		review_count: review_count as i32,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_set_yields_zero() {
		assert_eq!(round_avg_rating(0, 0), 0.0);
	}

	#[test]
	fn mean_of_three_and_five_is_four() {
		assert_eq!(round_avg_rating(3 + 5, 2), 4.0);
	}

	#[test]
	fn single_review_keeps_its_rating() {
		assert_eq!(round_avg_rating(5, 1), 5.0);
	}

	#[test]
	fn rounds_to_one_decimal() {
		// 4, 4, 5 -> 4.333...
		assert_eq!(round_avg_rating(13, 3), 4.3);
		// 3, 4, 5, 5 -> 4.25, половинка уходит вверх
		assert_eq!(round_avg_rating(17, 4), 4.3);
	}

	#[test]
	fn exact_half_rounds_up() {
		// 4, 5 -> 4.5 представимо точно
		assert_eq!(round_avg_rating(9, 2), 4.5);
		// 1, 2, 2, 2, 2, 2, 2, 2 -> 1.875 -> 1.9
		assert_eq!(round_avg_rating(15, 8), 1.9);
	}
}
