pub mod user;

pub use self::user::*;
