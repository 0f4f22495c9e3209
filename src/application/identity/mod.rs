//! Identity module: credentials, authentication and account administration

pub mod admin;
pub mod credentials;
pub mod service;

pub use admin::{AccountAdminService, CreateAccount, UpdateAccount};
pub use credentials::{CredentialService, IssuedToken};
pub use service::{AuthResult, AuthService, INVALID_CREDENTIALS};
