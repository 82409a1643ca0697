mod user_model;

pub use user_model::{User, UserPayload};
