//! Seed data for the task pages.
//!
//! There is no storage backend: every task page mounts with this sample
//! collection, and tests use it as a fixture.

use crate::entities::{Priority, Task};
use chrono::{DateTime, NaiveDate, Utc};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn midnight_utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

/// The sample task list shown on the Task and Work pages
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Design Homepage".to_string(),
            description: Some("Create wireframes and mockups for the new homepage.".to_string()),
            completed: false,
            due_date: date(2024, 7, 10),
            priority: Some(Priority::High),
            created_at: midnight_utc(2024, 6, 1),
            updated_at: None,
            created_by: "user1".to_string(),
            assigned_to: Some(vec!["user2".to_string(), "user3".to_string()]),
        },
        Task {
            id: "2".to_string(),
            title: "Implement Authentication".to_string(),
            description: None,
            completed: true,
            due_date: None,
            priority: None,
            created_at: midnight_utc(2024, 5, 20),
            updated_at: None,
            created_by: "user2".to_string(),
            assigned_to: None,
        },
    ]
}
