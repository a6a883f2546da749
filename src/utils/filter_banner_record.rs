use crate::models::{Banner, FilteredBanner};

pub fn filter_banner_record(banner: &Banner) -> FilteredBanner {
	FilteredBanner {
		banner_id: banner.banner_id.to_string(),
		name: banner.name.to_owned(),
		area: banner.area.to_owned(),
		position: banner.position.to_owned(),
		heading: banner.heading.to_owned(),
		subheading: banner.subheading.to_owned(),
		description: banner.description.to_owned(),
		image: banner.image.to_owned(),
		mobile_image: banner.mobile_image.to_owned(),
		link: banner.link.to_owned(),
		button_text: banner.button_text.to_owned(),
		text_color: banner.text_color.to_owned(),
		overlay_opacity: banner.overlay_opacity,
		text_align: banner.text_align.to_owned(),
		sort_order: banner.sort_order,
	}
}
