use crate::config::AppConfig;
use crate::interceptor::log_requests;
use crate::modules::user::{
    InMemoryUserRepository, PostgresUserRepository, UserController, UserRepository,
};
use axum::{Router, middleware};
use std::sync::Arc;

/// Pick the storage backend for the lifetime of the process.
///
/// Test mode never touches Postgres; otherwise the pool is opened and the
/// schema bootstrapped. Neither path fails: an unusable database shows up
/// as per-request errors.
pub async fn select_repository(config: &AppConfig) -> Arc<dyn UserRepository> {
    if config.is_test_mode() {
        tracing::info!("🧪 Test mode: using in-memory user store");
        return Arc::new(InMemoryUserRepository::new());
    }

    tracing::info!("🐘 Using Postgres user store");
    Arc::new(PostgresUserRepository::connect(&config.database).await)
}

/// Root router with every controller and the request logger attached.
pub fn build_router(repository: Arc<dyn UserRepository>) -> Router {
    let user_controller = Arc::new(UserController::new(repository));

    Router::new()
        .merge(UserController::router(user_controller))
        .layer(middleware::from_fn(log_requests))
}
