//! # user-registry
//!
//! A small HTTP service for creating, reading, updating and deleting users.
//!
//! Users live in a Postgres `users` table. When `NODE_ENV=test` the service
//! runs against an in-memory store instead and never opens a database
//! connection. The backend is chosen once at startup and injected into the
//! router as an `Arc<dyn UserRepository>`.
//!
//! ## Routes
//!
//! | Route | Success | Missing id |
//! |---|---|---|
//! | `GET /api/users` | 200, array | |
//! | `GET /api/users/{id}` | 200, object | 404 |
//! | `POST /api/users` | 201, object | |
//! | `PUT /api/users/{id}` | 200, object | 404 |
//! | `DELETE /api/users/{id}` | 204, empty | 404 |
//!
//! Backend failures on any route answer 500 with `{"error": "..."}`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use user_registry::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let repository: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//!     let router = build_router(repository);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod app_module;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod interceptor;
pub mod lifecycle;
pub mod modules;
pub mod pipe;

pub use app_module::{build_router, select_repository};
pub use config::{AppConfig, ConfigService, Environment};
pub use error::{AppError, Result};

/// Prelude module for convenient imports
///
/// ```
/// use user_registry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app_module::{build_router, select_repository};
    pub use crate::config::{AppConfig, ConfigService, Environment};
    pub use crate::error::{AppError, Result};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::modules::user::{
        InMemoryUserRepository, PostgresUserRepository, User, UserController, UserPayload,
        UserRepository,
    };
    pub use std::sync::Arc;
}
