pub mod filter_banner_record;
pub mod filter_category_record;
pub mod filter_gallery_record;
pub mod filter_product_record;
pub mod filter_review_record;
pub mod filter_user_record;

pub use self::filter_banner_record::filter_banner_record;
pub use self::filter_category_record::filter_category_record;
pub use self::filter_gallery_record::filter_gallery_record;
pub use self::filter_product_record::filter_product_record;
pub use self::filter_review_record::filter_review_record;
pub use self::filter_user_record::filter_user_record;
