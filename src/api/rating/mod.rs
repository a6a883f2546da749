pub mod rating;

pub use self::rating::*;
