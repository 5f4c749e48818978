//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for all core repository ports, enabling
//! deterministic service tests without database dependencies. Each mock is
//! a mutex-guarded map keyed by id, mirroring the keyed-store semantics of
//! the real adapters (put is upsert, delete is idempotent).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use dayscore_core::activities::ports::ActivityRepository;
use dayscore_core::categories::ports::CategoryRepository;
use dayscore_core::goals::ports::GoalRepository;
use dayscore_core::tasks::ports::TaskRepository;
use dayscore_domain::{ActivityCategory, ActivityLog, DailyGoal, Result as DomainResult, Task};

/// In-memory mock for `CategoryRepository`.
#[derive(Default)]
pub struct MockCategoryRepository {
    categories: Mutex<HashMap<String, ActivityCategory>>,
}

#[async_trait]
impl CategoryRepository for MockCategoryRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<ActivityCategory>> {
        Ok(self.categories.lock().expect("mutex poisoned").get(id).cloned())
    }

    async fn put(&self, category: ActivityCategory) -> DomainResult<()> {
        self.categories.lock().expect("mutex poisoned").insert(category.id.clone(), category);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.categories.lock().expect("mutex poisoned").remove(id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<ActivityCategory>> {
        let mut all: Vec<_> =
            self.categories.lock().expect("mutex poisoned").values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<ActivityCategory>> {
        Ok(self
            .categories
            .lock()
            .expect("mutex poisoned")
            .values()
            .find(|category| category.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}

/// In-memory mock for `ActivityRepository`.
#[derive(Default)]
pub struct MockActivityRepository {
    logs: Mutex<HashMap<String, ActivityLog>>,
}

#[async_trait]
impl ActivityRepository for MockActivityRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<ActivityLog>> {
        Ok(self.logs.lock().expect("mutex poisoned").get(id).cloned())
    }

    async fn put(&self, log: ActivityLog) -> DomainResult<()> {
        self.logs.lock().expect("mutex poisoned").insert(log.id.clone(), log);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.logs.lock().expect("mutex poisoned").remove(id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<ActivityLog>> {
        let mut all: Vec<_> = self.logs.lock().expect("mutex poisoned").values().cloned().collect();
        all.sort_by_key(|log| log.start_time);
        Ok(all)
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<ActivityLog>> {
        let mut day: Vec<_> = self
            .logs
            .lock()
            .expect("mutex poisoned")
            .values()
            .filter(|log| log.date == date)
            .cloned()
            .collect();
        day.sort_by_key(|log| log.start_time);
        Ok(day)
    }

    async fn count_for_category(&self, category_id: &str) -> DomainResult<i64> {
        let count = self
            .logs
            .lock()
            .expect("mutex poisoned")
            .values()
            .filter(|log| log.category_id == category_id)
            .count();
        Ok(count as i64)
    }

    async fn dates_for_category(&self, category_id: &str) -> DomainResult<Vec<NaiveDate>> {
        let mut dates: Vec<_> = self
            .logs
            .lock()
            .expect("mutex poisoned")
            .values()
            .filter(|log| log.category_id == category_id)
            .map(|log| log.date)
            .collect();
        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates.dedup();
        Ok(dates)
    }
}

/// In-memory mock for `TaskRepository`.
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Mutex<HashMap<String, Task>>,
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<Task>> {
        Ok(self.tasks.lock().expect("mutex poisoned").get(id).cloned())
    }

    async fn put(&self, task: Task) -> DomainResult<()> {
        self.tasks.lock().expect("mutex poisoned").insert(task.id.clone(), task);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.tasks.lock().expect("mutex poisoned").remove(id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        Ok(self.tasks.lock().expect("mutex poisoned").values().cloned().collect())
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<Task>> {
        Ok(self
            .tasks
            .lock()
            .expect("mutex poisoned")
            .values()
            .filter(|task| task.date == date)
            .cloned()
            .collect())
    }
}

/// In-memory mock for `GoalRepository`.
#[derive(Default)]
pub struct MockGoalRepository {
    goals: Mutex<HashMap<String, DailyGoal>>,
}

#[async_trait]
impl GoalRepository for MockGoalRepository {
    async fn get(&self, id: &str) -> DomainResult<Option<DailyGoal>> {
        Ok(self.goals.lock().expect("mutex poisoned").get(id).cloned())
    }

    async fn put(&self, goal: DailyGoal) -> DomainResult<()> {
        self.goals.lock().expect("mutex poisoned").insert(goal.id.clone(), goal);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.goals.lock().expect("mutex poisoned").remove(id);
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<DailyGoal>> {
        Ok(self.goals.lock().expect("mutex poisoned").values().cloned().collect())
    }

    async fn list_by_date(&self, date: NaiveDate) -> DomainResult<Vec<DailyGoal>> {
        Ok(self
            .goals
            .lock()
            .expect("mutex poisoned")
            .values()
            .filter(|goal| goal.date == date)
            .cloned()
            .collect())
    }
}
