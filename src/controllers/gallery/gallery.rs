use crate::{
	api::CustomError,
	jwt_auth,
	models::{CreateGalleryImageSchema, FilteredGalleryImage, UserGalleryImage},
	utils::filter_gallery_record,
	AppState,
};
use actix_web::{
	get, post,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;
use uuid::Uuid;

#[post("/reviews/gallery")]
pub async fn create_gallery_image_handler(
	body: web::Json<CreateGalleryImageSchema>,
	data: web::Data<AppState>,
	jwt: jwt_auth::JwtMiddleware,
) -> Result<HttpResponse, CustomError> {
	let image = UserGalleryImage::create(&data.db, &jwt.user_id, &body.into_inner()).await?;

	Ok(HttpResponse::Created().json(json!({
		"status": "success",
		"data": json!({
			"image": image
		})
	})))
}

#[get("/reviews/gallery/{id}")]
pub async fn get_product_gallery_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> impl Responder {
	let product_id = path.into_inner();

	let query_result = UserGalleryImage::approved_for_product(&data.db, &product_id).await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения галереи";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let images = query_result.unwrap();

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"images": &images.iter().map(filter_gallery_record).collect::<Vec<FilteredGalleryImage>>(),
			"images_count": &images.len()
		})
	});

	HttpResponse::Ok().json(json_response)
}
