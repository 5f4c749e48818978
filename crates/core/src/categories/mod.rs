//! Category management: ports and service

pub mod ports;
pub mod service;

pub use service::CategoryService;
