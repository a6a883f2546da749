use crate::models::{FilteredProduct, Product};

pub fn filter_product_record(product: &Product) -> FilteredProduct {
	FilteredProduct {
		product_id: product.product_id.to_string(),
		category_id: product.category_id.to_string(),
		name: product.name.to_owned(),
		brand: product.brand.to_owned(),
		description: product.description.to_owned(),
		price: product.price,
		avg_rating: product.avg_rating,
		review_count: product.review_count,
	}
}
