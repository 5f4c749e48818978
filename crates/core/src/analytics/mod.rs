//! Analytics aggregation over activity logs and goals

pub mod service;

pub use service::AnalyticsService;
