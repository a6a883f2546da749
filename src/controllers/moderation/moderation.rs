use crate::{
	api::CustomError,
	controllers::auth::Role,
	models::{ApproveSchema, PendingGalleryImage, PendingReview, Review, UserGalleryImage},
	AppState,
};
use actix_web::{
	get, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use actix_web_grants::proc_macro::has_any_role;
use serde_json::json;
use uuid::Uuid;

#[get("/reviews/admin/pending")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn get_pending_reviews_handler(data: web::Data<AppState>) -> impl Responder {
	let query_result = PendingReview::list(&data.db).await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения reviews";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let reviews = query_result.unwrap();

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"reviews": &reviews,
			"reviews_count": &reviews.len()
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/reviews/admin/gallery/pending")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn get_pending_gallery_handler(data: web::Data<AppState>) -> impl Responder {
	let query_result = PendingGalleryImage::list(&data.db).await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения галереи";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let images = query_result.unwrap();

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"images": &images,
			"images_count": &images.len()
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[put("/reviews/admin/{id}/approve")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn approve_review_handler(
	path: Path<Uuid>,
	body: web::Json<ApproveSchema>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let (review, product_rating) =
		Review::decide(&data.db, &path.into_inner(), &body.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"review": review,
			"product_rating": product_rating
		})
	})))
}

#[put("/reviews/admin/gallery/{id}/approve")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn approve_gallery_image_handler(
	path: Path<Uuid>,
	body: web::Json<ApproveSchema>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let image = UserGalleryImage::decide(&data.db, &path.into_inner(), &body.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"image": image
		})
	})))
}
