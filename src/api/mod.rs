pub mod banners;
pub mod error;
pub mod gallery;
pub mod moderation;
pub mod rating;
pub mod reviews;

pub use self::banners::*;
pub use self::error::*;
pub use self::gallery::*;
pub use self::moderation::*;
pub use self::rating::*;
pub use self::reviews::*;
