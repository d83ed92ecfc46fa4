//! Liveness endpoint

use axum::{routing::get, Router};

use crate::state::AppState;

async fn liveness() -> &'static str {
    "Task manager server is running"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(liveness))
}
