use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

/// Category assigned when a task is created without one.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// A task row as stored and as serialized in list responses.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a task.
///
/// `username` and `title` are optional at the serde level so a missing field
/// fails validation instead of deserialization; `category` falls back to
/// [`DEFAULT_CATEGORY`] when omitted (or sent as `null`).
#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub username: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
}

impl NewTask {
    /// Returns `(username, title, category)` with the sentinel category
    /// applied, or a validation error when a required field is missing.
    pub fn fields(&self) -> Result<(&str, &str, &str), AppError> {
        let username = non_empty(&self.username);
        let title = non_empty(&self.title);
        match (username, title) {
            (Some(username), Some(title)) => {
                let category = non_empty(&self.category).unwrap_or(DEFAULT_CATEGORY);
                Ok((username, title, category))
            }
            _ => Err(AppError::Validation(
                "username and title are required".into(),
            )),
        }
    }
}

/// Partial-update payload for a task.
///
/// Only the fields present in the request are written; the others keep their
/// stored values.
#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.completed.is_none()
    }

    /// Maps the present fields to their column assignments, in the order the
    /// handler binds the values.
    pub fn assignments(&self) -> Vec<&'static str> {
        let mut columns = Vec::new();
        if self.title.is_some() {
            columns.push("title = ?");
        }
        if self.category.is_some() {
            columns.push("category = ?");
        }
        if self.completed.is_some() {
            columns.push("completed = ?");
        }
        columns
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
