//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod server;

pub use database::{init_database, DatabaseConfig};
pub use server::shutdown_signal;
