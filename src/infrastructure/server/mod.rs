//! Server lifecycle helpers

pub mod shutdown;

pub use shutdown::shutdown_signal;
