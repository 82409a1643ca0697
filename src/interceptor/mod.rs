//! Request interceptors, applied to the router as axum middleware.

pub mod logging;

pub use logging::log_requests;
