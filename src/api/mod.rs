//! HTTP surface: handlers and router setup.
pub mod handlers;
pub mod routes;

pub use routes::{router, AppState};
