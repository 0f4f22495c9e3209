pub mod auth;
pub mod equipment;
pub mod health;
pub mod history;
pub mod metrics;
pub mod substations;
pub mod users;
