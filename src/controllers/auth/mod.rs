pub mod extract;
pub mod login;
pub mod logout;
pub mod register;

pub use self::extract::{extract, Role};
pub use self::login::login_user_handler;
pub use self::logout::logout_user_handler;
pub use self::register::register_user_handler;
