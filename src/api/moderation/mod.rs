pub mod moderation;

pub use self::moderation::*;
