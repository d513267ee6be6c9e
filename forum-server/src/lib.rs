//! forum-server: topics and comments over HTTP
//!
//! A small REST backend for a discussion forum. Topics carry a denormalized
//! `replies` counter and a `last_post` marker that move with their comments
//! inside the same database transaction.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
