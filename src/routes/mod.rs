//! Service-level route handlers

pub mod health;

use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}
