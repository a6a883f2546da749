use crate::models::{FilteredGalleryImage, GalleryImageWithAuthor};

pub fn filter_gallery_record(image: &GalleryImageWithAuthor) -> FilteredGalleryImage {
	FilteredGalleryImage {
		img_id: image.img_id.to_string(),
		product_id: image.product_id.to_string(),
		image: image.image.to_owned(),
		caption: image.caption.to_owned(),
		author_name: image.author_name.to_owned(),
		created_ts: image.created_ts,
	}
}
