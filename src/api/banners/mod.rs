pub mod banners;

pub use self::banners::*;
