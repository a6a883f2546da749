pub mod auth;
pub mod banners;
pub mod categories;
pub mod config;
pub mod gallery;
pub mod moderation;
pub mod products;
pub mod reviews;
pub mod user;

pub use self::config::config;
