//! Database implementations

pub mod activity_repository;
pub mod category_repository;
pub mod goal_repository;
pub mod manager;
pub mod pool;
pub mod task_repository;

pub use activity_repository::*;
pub use category_repository::*;
pub use goal_repository::*;
pub use manager::*;
pub use pool::*;
pub use task_repository::*;
