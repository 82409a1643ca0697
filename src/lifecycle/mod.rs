//! Application lifecycle
//!
//! The service has no startup or teardown hooks beyond opening the store,
//! so this only carries the shutdown signal used by `axum::serve`.

mod shutdown;

pub use shutdown::shutdown_signal;
