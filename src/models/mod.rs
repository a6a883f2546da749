pub mod banners;
pub mod categories;
pub mod gallery;
pub mod products;
pub mod reviews;
pub mod shared;
pub mod users;

pub use self::banners::*;
pub use self::categories::*;
pub use self::gallery::*;
pub use self::products::*;
pub use self::reviews::*;
pub use self::shared::*;
pub use self::users::*;
