use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// Identifier of the user who owns the task.
    pub user_id: i32,
    /// The title of the task.
    pub title: String,
    /// An optional description for the task.
    pub description: Option<String>,
    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,
    /// Small-integer priority; higher sorts first. Defaults to 1.
    pub priority: i32,
    /// The category this task belongs to, if any.
    pub category_id: Option<Uuid>,
    /// Whether the task is done.
    pub is_completed: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating a task.
///
/// Everything but the title is optional; `priority` defaults to 1 and the
/// completion flag always starts false.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct NewTask {
    /// The title of the task. Must not be empty.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// An optional description for the task.
    #[validate(length(max = 1000))]
    pub description: Option<String>,

    /// Optional due date for the task.
    pub due_date: Option<DateTime<Utc>>,

    /// Priority; omitted means 1.
    pub priority: Option<i32>,

    /// Category to file the task under. Must belong to the caller.
    pub category_id: Option<Uuid>,
}

/// Input structure for updating a task.
///
/// A full replacement, not a patch: every mutable field must be supplied,
/// mirroring the current value when unchanged.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    pub priority: i32,

    pub category_id: Option<Uuid>,

    pub is_completed: bool,
}

/// Query parameters for filtering the task listing.
///
/// Each field, when present, adds one AND-combined predicate to the query.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive substring match on title.
    pub search: Option<String>,
    /// Exact match on priority.
    pub priority: Option<i32>,
    /// Exact match on category.
    pub category_id: Option<Uuid>,
    /// Exact match on the completion flag.
    pub is_completed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_validation() {
        let valid_input = NewTask {
            title: "Valid Task".to_string(),
            description: Some("Valid Description".to_string()),
            due_date: Some(Utc::now()),
            priority: Some(2),
            category_id: None,
        };
        assert!(valid_input.validate().is_ok());

        let invalid_input = NewTask {
            title: "".to_string(), // Empty title
            description: Some("Valid Description".to_string()),
            due_date: None,
            priority: None,
            category_id: None,
        };
        assert!(invalid_input.validate().is_err());

        let long_title = NewTask {
            title: "a".repeat(201),
            description: None,
            due_date: None,
            priority: None,
            category_id: None,
        };
        assert!(long_title.validate().is_err());
    }

    #[test]
    fn test_task_update_validation() {
        let valid = TaskUpdate {
            title: "Still valid".to_string(),
            description: None,
            due_date: None,
            priority: 1,
            category_id: None,
            is_completed: true,
        };
        assert!(valid.validate().is_ok());

        let empty_title = TaskUpdate {
            title: "".to_string(),
            description: None,
            due_date: None,
            priority: 1,
            category_id: None,
            is_completed: false,
        };
        assert!(empty_title.validate().is_err());

        let long_description = TaskUpdate {
            title: "Valid title for desc test".to_string(),
            description: Some("b".repeat(1001)),
            due_date: None,
            priority: 1,
            category_id: None,
            is_completed: false,
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_filter_deserializes_from_query_string() {
        let filter = actix_web::web::Query::<TaskFilter>::from_query(
            "search=report&priority=2&is_completed=false",
        )
        .unwrap()
        .into_inner();
        assert_eq!(filter.search.as_deref(), Some("report"));
        assert_eq!(filter.priority, Some(2));
        assert_eq!(filter.is_completed, Some(false));
        assert!(filter.category_id.is_none());
    }
}
