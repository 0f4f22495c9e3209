//! Substation module: public overview and bulk unit reassignment

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
