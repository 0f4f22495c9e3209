//! Operations history use-cases

pub mod service;

pub use service::HistoryService;
