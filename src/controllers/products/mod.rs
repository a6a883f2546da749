pub mod products;

pub use self::products::*;
