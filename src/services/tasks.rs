use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{NewTask, Task, TaskFilter, TaskUpdate};

const TASK_COLUMNS: &str =
    "id, user_id, title, description, due_date, priority, category_id, is_completed, \
     created_at, updated_at";

/// Fixed listing order: unfinished before finished, soonest due date first
/// with undated tasks last, then highest priority, then newest.
const TASK_ORDERING: &str =
    " ORDER BY is_completed ASC, due_date ASC NULLS LAST, priority DESC, created_at DESC";

/// Appends one AND-combined predicate per present filter field.
///
/// The builder must already hold a `WHERE user_id = <bind>` clause; every
/// predicate here narrows that user-scoped set.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &TaskFilter) {
    if let Some(search) = &filter.search {
        query.push(" AND title ILIKE ");
        query.push_bind(format!("%{}%", search));
    }
    if let Some(priority) = filter.priority {
        query.push(" AND priority = ");
        query.push_bind(priority);
    }
    if let Some(category_id) = filter.category_id {
        query.push(" AND category_id = ");
        query.push_bind(category_id);
    }
    if let Some(is_completed) = filter.is_completed {
        query.push(" AND is_completed = ");
        query.push_bind(is_completed);
    }
}

/// CRUD and filtered listing over user-scoped tasks.
#[derive(Clone)]
pub struct TaskService {
    pool: PgPool,
}

impl TaskService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists the caller's tasks, optionally narrowed by `filter`, in the
    /// fixed `TASK_ORDERING`.
    pub async fn list(
        &self,
        user: &CurrentUser,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, AppError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {} FROM tasks WHERE user_id = ", TASK_COLUMNS));
        query.push_bind(user.id);
        push_filters(&mut query, filter);
        query.push(TASK_ORDERING);

        let tasks = query
            .build_query_as::<Task>()
            .fetch_all(&self.pool)
            .await?;

        Ok(tasks)
    }

    /// Creates a task for the caller. Priority defaults to 1; the completion
    /// flag always starts false.
    pub async fn create(&self, user: &CurrentUser, input: NewTask) -> Result<Task, AppError> {
        if let Some(category_id) = input.category_id {
            self.assert_category_owned(user, category_id).await?;
        }

        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (id, user_id, title, description, due_date, priority, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.priority.unwrap_or(1))
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn get(&self, user: &CurrentUser, task_id: Uuid) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1 AND user_id = $2",
            TASK_COLUMNS
        ))
        .bind(task_id)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    /// Full replacement of the mutable field set; refreshes `updated_at`.
    pub async fn update(
        &self,
        user: &CurrentUser,
        task_id: Uuid,
        input: TaskUpdate,
    ) -> Result<Task, AppError> {
        if let Some(category_id) = input.category_id {
            self.assert_category_owned(user, category_id).await?;
        }

        let task = sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks \
             SET title = $1, description = $2, due_date = $3, priority = $4, \
                 category_id = $5, is_completed = $6, updated_at = NOW() \
             WHERE id = $7 AND user_id = $8 \
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.priority)
        .bind(input.category_id)
        .bind(input.is_completed)
        .bind(task_id)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound("Task not found".into()))
    }

    pub async fn delete(&self, user: &CurrentUser, task_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Task not found".into()));
        }

        Ok(())
    }

    /// A task may only reference a category of the same owner. A missing or
    /// foreign category is a client error on the task payload, not a 404.
    async fn assert_category_owned(
        &self,
        user: &CurrentUser,
        category_id: Uuid,
    ) -> Result<(), AppError> {
        let row =
            sqlx::query_as::<_, (Uuid,)>("SELECT id FROM categories WHERE id = $1 AND user_id = $2")
                .bind(category_id)
                .bind(user.id)
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(_) => Ok(()),
            None => Err(AppError::Validation("Unknown category".into())),
        }
    }
}
