use crate::{jwt_auth, models::User, utils::filter_user_record, AppState};
use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

#[get("/users/me")]
pub async fn get_me_handler(data: web::Data<AppState>, jwt: jwt_auth::JwtMiddleware) -> impl Responder {
	let query_result = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
		.bind(jwt.user_id)
		.fetch_optional(&data.db)
		.await;

	if query_result.is_err() {
		let message = "Что-то пошло не так во время чтения users";
		return HttpResponse::InternalServerError()
			.json(json!({"status": "error","message": message}));
	}

	let user = match query_result.unwrap() {
		Some(user) => user,
		None => {
			return HttpResponse::NotFound()
				.json(json!({"status": "fail","message": "Пользователь не найден"}));
		}
	};

	let json_response = json!({
		"status":  "success",
		"data": json!({
			"user": filter_user_record(&user)
		})
	});

	HttpResponse::Ok().json(json_response)
}
