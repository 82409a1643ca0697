pub mod controller;
pub mod domain;
pub mod repository;

pub use controller::UserController;
pub use domain::{User, UserPayload};
pub use repository::{InMemoryUserRepository, PostgresUserRepository, UserRepository};
