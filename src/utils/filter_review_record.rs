use crate::models::{FilteredReview, ReviewWithAuthor};

pub fn filter_review_record(review: &ReviewWithAuthor) -> FilteredReview {
	FilteredReview {
		review_id: review.review_id.to_string(),
		product_id: review.product_id.to_string(),
		rating: review.rating,
		title: review.title.to_owned(),
		comment: review.comment.to_owned(),
		images: review.images.to_owned(),
		is_verified: review.is_verified,
		helpful_count: review.helpful_count,
		author_name: review.author_name.to_owned(),
		created_ts: review.created_ts,
	}
}
