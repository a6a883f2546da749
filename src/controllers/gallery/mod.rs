pub mod gallery;

pub use self::gallery::*;
