pub mod categories;

pub use self::categories::*;
