//! Authentication module: register, login, current identity

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
