use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::{Category, CategoryInput};

/// CRUD over user-scoped categories.
#[derive(Clone)]
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All categories owned by the caller, ordered by name ascending.
    pub async fn list(&self, user: &CurrentUser) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, user_id, name FROM categories WHERE user_id = $1 ORDER BY name ASC",
        )
        .bind(user.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn create(
        &self,
        user: &CurrentUser,
        input: CategoryInput,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, user_id, name) VALUES ($1, $2, $3) \
             RETURNING id, user_id, name",
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .bind(&input.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(category)
    }

    /// Renames a category scoped to (id, owner); `NotFound` covers both a
    /// missing row and someone else's row.
    pub async fn rename(
        &self,
        user: &CurrentUser,
        category_id: Uuid,
        input: CategoryInput,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $1 WHERE id = $2 AND user_id = $3 \
             RETURNING id, user_id, name",
        )
        .bind(&input.name)
        .bind(category_id)
        .bind(user.id)
        .fetch_optional(&self.pool)
        .await?;

        category.ok_or_else(|| AppError::NotFound("Category not found".into()))
    }

    /// Deletes a category after clearing it from every task of the same
    /// owner, in one transaction. Either both statements apply or neither
    /// does; a zero-row delete rolls the unlink back and reports `NotFound`.
    pub async fn delete(&self, user: &CurrentUser, category_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE tasks SET category_id = NULL WHERE category_id = $1 AND user_id = $2")
            .bind(category_id)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM categories WHERE id = $1 AND user_id = $2")
            .bind(category_id)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Category not found".into()));
        }

        tx.commit().await?;
        Ok(())
    }
}
