use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::infrastructure::database;
use crate::modules::user::domain::{User, UserPayload};
use crate::modules::user::repository::{UserRepository, entity};
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

/// Postgres-backed user store.
///
/// Every operation is a single statement against the `users` table; a
/// statement that touches no row is reported as not found.
pub struct PostgresUserRepository {
    conn: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Opens the pool and makes sure the `users` table exists.
    ///
    /// A failed `CREATE TABLE` is logged and tolerated; requests will
    /// surface the problem as backend errors.
    pub async fn connect(config: &DatabaseConfig) -> Self {
        let conn = database::connect(config);
        database::ensure_schema(&conn).await;
        Self::new(conn)
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = entity::Entity::find().all(&self.conn).await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = entity::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(user.map(User::from))
    }

    async fn create(&self, payload: UserPayload) -> Result<User> {
        let model = entity::ActiveModel {
            id: NotSet,
            name: Set(payload.name),
            email: Set(payload.email),
        };
        let saved = model.insert(&self.conn).await?;
        Ok(saved.into())
    }

    async fn update(&self, id: i32, payload: UserPayload) -> Result<Option<User>> {
        let model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(payload.name),
            email: Set(payload.email),
        };
        match model.update(&self.conn).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn alice() -> entity::Model {
        entity::Model {
            id: 1,
            name: Some("Alice".to_string()),
            email: Some("a@x.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_maps_empty_result_to_none() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![alice()], Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PostgresUserRepository::new(conn);

        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name.as_deref(), Some("Alice"));
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_returns_generated_row() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![alice()]])
            .into_connection();
        let repo = PostgresUserRepository::new(conn);

        let user = repo.create(UserPayload::new("Alice", "a@x.com")).await.unwrap();
        assert_eq!(user, User::from(alice()));
    }

    #[tokio::test]
    async fn test_update_without_matching_row_is_none() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PostgresUserRepository::new(conn);

        let result = repo.update(5, UserPayload::new("x", "y")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_affected() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let repo = PostgresUserRepository::new(conn);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_driver_errors_surface_as_database_errors() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let repo = PostgresUserRepository::new(conn);

        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
