use std::str::FromStr;

use crate::{
	api::CustomError,
	controllers::auth::Role,
	models::{Banner, BannerArea, BannerFilterOptions, FilteredBanner, SaveBannerSchema},
	utils::filter_banner_record,
	AppState,
};
use actix_web::{
	delete, get, post, put,
	web::{self, Path},
	HttpResponse, Responder,
};
use actix_web_grants::proc_macro::has_any_role;
use serde_json::json;
use uuid::Uuid;

#[get("/banner/{area}")]
pub async fn get_banners_handler(
	path: Path<String>,
	opts: web::Query<BannerFilterOptions>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let area = BannerArea::from_str(&path.into_inner())
		.map_err(|_| CustomError::NotFound("Область баннеров не найдена".to_string()))?;

	let banners = Banner::active_for_area(&data.db, area, opts.position.as_deref()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"banners": banners.iter().map(filter_banner_record).collect::<Vec<FilteredBanner>>()
		})
	})))
}

#[post("/banner/{id}/click")]
pub async fn banner_click_handler(path: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
	// счётчик не должен ломать переход покупателя, ответ всегда успешный
	Banner::record_click(&data.db, &path.into_inner()).await;

	HttpResponse::Ok().json(json!({"status": "success"}))
}

#[post("/banner")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn create_banner_handler(
	body: web::Json<SaveBannerSchema>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let banner = Banner::create(&data.db, &body.into_inner()).await?;

	Ok(HttpResponse::Created().json(json!({
		"status": "success",
		"data": json!({
			"banner": banner
		})
	})))
}

#[get("/banner/{id}/json")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn get_banner_json_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	// сырая строка таблицы для формы редактирования, вместе с кликами и окном показа
	let banner = Banner::get(&data.db, &path.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"banner": banner
		})
	})))
}

#[put("/banner/{id}")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn update_banner_handler(
	path: Path<Uuid>,
	body: web::Json<SaveBannerSchema>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	let banner = Banner::update(&data.db, &path.into_inner(), &body.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"data": json!({
			"banner": banner
		})
	})))
}

#[delete("/banner/{id}")]
#[has_any_role("Role::Admin", type = "Role")]
pub async fn delete_banner_handler(
	path: Path<Uuid>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, CustomError> {
	Banner::delete(&data.db, &path.into_inner()).await?;

	Ok(HttpResponse::Ok().json(json!({"status": "success"})))
}
