use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A user-owned named category, visible and mutable only to its owner.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub user_id: i32,
    pub name: String,
}

/// Input structure for creating or renaming a category.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CategoryInput {
    /// The category name. Must not be empty.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_input_validation() {
        let valid = CategoryInput {
            name: "Work".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CategoryInput {
            name: "".to_string(),
        };
        assert!(empty.validate().is_err());

        let too_long = CategoryInput {
            name: "c".repeat(101),
        };
        assert!(too_long.validate().is_err());
    }
}
