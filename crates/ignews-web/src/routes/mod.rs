//! HTTP surface.

pub mod auth;
pub mod health;
pub mod home;
pub mod posts;
pub mod preview;

use axum::Router;
use axum::routing::get;

use crate::auth::session::session_layer;
use crate::state::AppState;

/// Builds the site router with the session layer applied.
pub fn router(state: AppState) -> Router {
    let sessions = session_layer(&state.config);
    Router::new()
        .route("/", get(home::home_page))
        .route("/posts", get(posts::posts_page))
        .route("/posts/preview/{slug}", get(preview::preview_page))
        .route("/posts/{slug}", get(posts::post_page))
        .route("/api/auth/signin", get(auth::sign_in))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/signout", get(auth::sign_out))
        .route("/api/auth/session", get(auth::session_json))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .layer(sessions)
        .with_state(state)
}

async fn robots_txt() -> &'static str {
    "User-agent: *\nAllow: /\n"
}
