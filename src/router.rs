//! Keep-alive HTTP routes.
//!
//! Hosting platforms that idle inactive processes poll these endpoints to
//! keep the bot running.

use axum::{routing::get, Router};

pub const ALIVE_MESSAGE: &str = "Hello. I am alive!";

pub fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/health", get(alive))
}

async fn alive() -> &'static str {
    ALIVE_MESSAGE
}
