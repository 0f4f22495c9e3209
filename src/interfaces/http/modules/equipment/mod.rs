//! Equipment registry module: units, cells and their transitions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
