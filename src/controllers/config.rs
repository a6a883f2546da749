use actix_web::web;

use crate::controllers::auth::login_user_handler;
use crate::controllers::auth::logout_user_handler;
use crate::controllers::auth::register_user_handler;
use crate::controllers::banners::banner_click_handler;
use crate::controllers::banners::create_banner_handler;
use crate::controllers::banners::delete_banner_handler;
use crate::controllers::banners::get_banner_json_handler;
use crate::controllers::banners::get_banners_handler;
use crate::controllers::banners::update_banner_handler;
use crate::controllers::categories::get_categories_handler;
use crate::controllers::categories::get_category_handler;
use crate::controllers::gallery::create_gallery_image_handler;
use crate::controllers::gallery::get_product_gallery_handler;
use crate::controllers::moderation::approve_gallery_image_handler;
use crate::controllers::moderation::approve_review_handler;
use crate::controllers::moderation::get_pending_gallery_handler;
use crate::controllers::moderation::get_pending_reviews_handler;
use crate::controllers::products::get_product_handler;
use crate::controllers::products::get_products_handler;
use crate::controllers::reviews::create_review_handler;
use crate::controllers::reviews::get_product_reviews_handler;
use crate::controllers::reviews::review_helpful_handler;
use crate::controllers::user::get_me_handler;

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		.service(register_user_handler)
		.service(login_user_handler)
		.service(logout_user_handler)
		.service(get_me_handler)
		.service(get_categories_handler)
		.service(get_category_handler)
		.service(get_products_handler)
		.service(get_product_handler)
		.service(create_review_handler)
		.service(get_product_reviews_handler)
		.service(review_helpful_handler)
		.service(create_gallery_image_handler)
		.service(get_product_gallery_handler)
		.service(get_pending_reviews_handler)
		.service(get_pending_gallery_handler)
		.service(approve_review_handler)
		.service(approve_gallery_image_handler)
		.service(get_banners_handler)
		.service(banner_click_handler)
		.service(create_banner_handler)
		.service(get_banner_json_handler)
		.service(update_banner_handler)
		.service(delete_banner_handler);

	conf.service(scope);
}
