//! Landing page.

use axum::extract::State;
use axum::response::IntoResponse;
use tower_sessions::Session;

use crate::auth::session::session_user;
use crate::render;
use crate::state::AppState;

/// `GET /` home page with the subscription pitch.
pub async fn home_page(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let user = session_user(&session).await;
    render::home::page(&state.config.site_name, user.as_ref())
}
