use crate::error::Result;
use crate::modules::user::domain::{User, UserPayload};
use async_trait::async_trait;

pub mod entity;
mod in_memory;
mod postgres;

pub use in_memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;

/// Storage backend for users.
///
/// Exactly one implementation serves the process; it is chosen at startup
/// and shared by every handler. `None`/`false` results mean the id is not
/// present.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>>;
    async fn create(&self, payload: UserPayload) -> Result<User>;
    /// Overwrites both fields; never creates a missing user.
    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>>;
    async fn delete(&self, id: i32) -> Result<bool>;
}
