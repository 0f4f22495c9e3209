//! Account administration module (admin role only)

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
