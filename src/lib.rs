//! # Switchgear Service
//!
//! Backend for tracking substation switchgear: units and their cells, cell
//! status transitions, an append-only operations ledger and operator
//! accounts with role-gated access.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, error taxonomy and repository traits
//! - **application**: Use-case services (credentials, auth, accounts, equipment, history)
//! - **infrastructure**: Crypto, database (sea-orm) and server lifecycle
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML + environment configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, resolve_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiServices};
