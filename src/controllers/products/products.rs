use crate::{
	models::{FilteredProduct, Product, ProductsCount, ProductsFilterOptions},
	utils::filter_product_record,
	AppState,
};
use actix_web::{
	get,
	web::{self, Path},
	HttpResponse, Responder,
};
use serde_json::json;
use uuid::Uuid;

#[get("/products")]
pub async fn get_products_handler(
	opts: web::Query<ProductsFilterOptions>,
	data: web::Data<AppState>,
) -> impl Responder {
	let limit = opts.limit.unwrap_or(10);
	let offset = (opts.page.unwrap_or(1) - 1) * limit;

	let category_id = match opts.category_id.as_deref() {
		Some(raw) => match Uuid::parse_str(raw) {
			Ok(category_id) => Some(category_id),
			Err(_) => {
				return HttpResponse::BadRequest()
					.json(json!({"status": "fail","message": "Некорректный category_id"}));
			}
		},
		None => None,
	};

	let query_result = match category_id {
		Some(category_id) => {
			sqlx::query_as::<_, Product>(
				"SELECT * FROM products
				WHERE category_id = $1
				ORDER BY created_ts
				LIMIT $2 OFFSET $3",
			)
			.bind(category_id)
			.bind(limit as i64)
			.bind(offset as i64)
			.fetch_all(&data.db)
			.await
		}
		None => {
			sqlx::query_as::<_, Product>(
				"SELECT * FROM products ORDER BY created_ts LIMIT $1 OFFSET $2",
			)
			.bind(limit as i64)
			.bind(offset as i64)
			.fetch_all(&data.db)
			.await
		}
	};

	let count_query_result = match category_id {
		Some(category_id) => {
			sqlx::query_as::<_, ProductsCount>(
				"SELECT count(*) AS count FROM products WHERE category_id = $1",
			)
			.bind(category_id)
			.fetch_one(&data.db)
			.await
		}
		None => {
			sqlx::query_as::<_, ProductsCount>("SELECT count(*) AS count FROM products")
				.fetch_one(&data.db)
				.await
		}
	};

	if query_result.is_err() || count_query_result.is_err() {
		let message = "Что-то пошло не так во время чтения products";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let products = query_result.unwrap();
	let products_count = count_query_result.unwrap();

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"products": &products.into_iter().map(|product| filter_product_record(&product)).collect::<Vec<FilteredProduct>>(),
			"products_count": &products_count.count.unwrap_or(0)
		})
	});

	HttpResponse::Ok().json(json_response)
}

#[get("/product/{id}")]
pub async fn get_product_handler(path: Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
	let product_id = &path.into_inner();

	let query_result = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE product_id = $1")
		.bind(product_id)
		.fetch_optional(&data.db)
		.await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения products";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let product = match query_result.unwrap() {
		Some(product) => product,
		None => {
			return HttpResponse::NotFound()
				.json(json!({"status": "fail","message": "Товар не найден"}));
		}
	};

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"product": filter_product_record(&product)
		})
	});

	HttpResponse::Ok().json(json_response)
}
