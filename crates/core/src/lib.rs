//! # DayScore Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the four collections
//! - Services enforcing write-time validation and referential integrity
//! - The scoring engine deriving duration, points, and dates
//! - The analytics aggregator (summaries, goal progress, streaks)
//!
//! ## Architecture Principles
//! - Only depends on `dayscore-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod activities;
pub mod analytics;
pub mod categories;
pub mod goals;
pub mod scoring;
pub mod tasks;

// Re-export specific items to avoid ambiguity
pub use activities::ports::ActivityRepository;
pub use activities::ActivityService;
pub use analytics::AnalyticsService;
pub use categories::ports::CategoryRepository;
pub use categories::CategoryService;
pub use goals::ports::GoalRepository;
pub use goals::GoalService;
pub use tasks::ports::TaskRepository;
pub use tasks::TaskService;
