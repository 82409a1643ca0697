use crate::error::{AppError, Result};
use crate::modules::user::domain::{User, UserPayload};
use crate::modules::user::repository::UserRepository;
use crate::pipe::{JsonBody, UserId};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use std::sync::Arc;

/// HTTP surface for users.
///
/// Handlers delegate to whichever [`UserRepository`] the application was
/// started with and never inspect which backend that is.
pub struct UserController {
    repository: Arc<dyn UserRepository>,
}

impl UserController {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn base_path() -> &'static str {
        "/api/users"
    }

    pub fn router(controller: Arc<Self>) -> Router {
        let base = Self::base_path();
        Router::new()
            .route(base, get(Self::list).post(Self::create))
            .route(
                &format!("{}/{{id}}", base),
                get(Self::get_one).put(Self::update).delete(Self::delete),
            )
            .with_state(controller)
    }

    async fn list(State(this): State<Arc<Self>>) -> Result<Json<Vec<User>>> {
        let users = this.repository.find_all().await?;
        Ok(Json(users))
    }

    async fn get_one(State(this): State<Arc<Self>>, UserId(id): UserId) -> Result<Json<User>> {
        this.repository
            .find_by_id(id)
            .await?
            .map(Json)
            .ok_or(AppError::NotFound)
    }

    async fn create(
        State(this): State<Arc<Self>>,
        JsonBody(payload): JsonBody<UserPayload>,
    ) -> Result<(StatusCode, Json<User>)> {
        let user = this.repository.create(payload).await?;
        tracing::debug!("Created user {}", user.id);
        Ok((StatusCode::CREATED, Json(user)))
    }

    async fn update(
        State(this): State<Arc<Self>>,
        UserId(id): UserId,
        JsonBody(payload): JsonBody<UserPayload>,
    ) -> Result<Json<User>> {
        this.repository
            .update(id, payload)
            .await?
            .map(Json)
            .ok_or(AppError::NotFound)
    }

    async fn delete(State(this): State<Arc<Self>>, UserId(id): UserId) -> Result<StatusCode> {
        if this.repository.delete(id).await? {
            Ok(StatusCode::NO_CONTENT)
        } else {
            Err(AppError::NotFound)
        }
    }
}
