use crate::{
	api::CustomError,
	jwt_auth,
	models::{CreateReviewSchema, FilterOptions, FilteredReview, Product, Review},
	utils::filter_review_record,
	AppState,
};
use actix_web::{
	get, post,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;
use uuid::Uuid;

#[post("/reviews")]
pub async fn create_review_handler(
	body: web::Json<CreateReviewSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> Result<HttpResponse, CustomError> {
	// отзыв сохраняется неодобренным, рейтинг товара не трогаем до модерации
	let review = Review::create(&data.db, &jwt.user_id, &body.into_inner()).await?;

	Ok(HttpResponse::Created().json(json!({
		"status": "success",
		"data": json!({
			"review": review
		})
	})))
}

#[get("/reviews/product/{id}")]
pub async fn get_product_reviews_handler(
	path: Path<Uuid>,
	opts: web::Query<FilterOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let product_id = path.into_inner();
	let limit = opts.limit.unwrap_or(10);
	let offset = (opts.page.unwrap_or(1) - 1) * limit;

	let product_query_result =
		sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
			.bind(product_id)
			.fetch_optional(&data.db)
			.await;

	if product_query_result.is_err() {
		let message = "Что-то пошло не так во время чтения products";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let product = match product_query_result.unwrap() {
		Some(product) => product,
		None => {
			return HttpResponse::NotFound()
				.json(json!({"status": "fail","message": "Товар не найден"}));
		}
	};

	let reviews_query_result =
		Review::approved_for_product(&data.db, &product_id, limit, offset).await;
	let histogram_query_result = Review::rating_histogram(&data.db, &product_id).await;

	if reviews_query_result.is_err() || histogram_query_result.is_err() {
		let message = "Что-то пошло не так во время чтения reviews";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let reviews = reviews_query_result.unwrap();
	let histogram = histogram_query_result.unwrap();

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"reviews": &reviews.iter().map(filter_review_record).collect::<Vec<FilteredReview>>(),
			"reviews_count": &product.review_count,
			"avg_rating": &product.avg_rating,
			"histogram": json!({
				"1": histogram[0],
				"2": histogram[1],
				"3": histogram[2],
				"4": histogram[3],
				"5": histogram[4]
			})
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[post("/reviews/{id}/helpful")]
pub async fn review_helpful_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let review = Review::mark_helpful(&data.db, &path.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"helpful_count": review.helpful_count
		})
	})))
}
