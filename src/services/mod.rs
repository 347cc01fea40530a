//! Business logic behind the HTTP layer.
//!
//! Each service owns a handle to the store (a `PgPool` injected at
//! construction) and receives the authenticated caller explicitly on every
//! call. All queries are scoped to the caller's user id; a row that exists
//! but belongs to someone else is indistinguishable from one that does not
//! exist.

pub mod categories;
pub mod tasks;
pub mod users;

pub use categories::CategoryService;
pub use tasks::TaskService;
pub use users::UserService;
