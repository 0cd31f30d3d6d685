//! Post preview: the page non-subscribers see.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use ignews_core::{PUBLICATION_TYPE, Post};
use tower_sessions::Session;

use crate::auth::session::{SessionPayload, session_user};
use crate::error::WebError;
use crate::prismic::PrismicClient;
use crate::render;
use crate::state::AppState;

/// `GET /posts/preview/{slug}`.
///
/// Subscribers never see the preview: their request is answered with a
/// redirect to the full post before any content is rendered.
pub async fn preview_page(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let user = session_user(&session).await;
    if let Some(user) = &user {
        let payload = state.hooks.session(SessionPayload::new(user.clone())).await;
        if payload.active_subscription.is_some() {
            return Ok(Redirect::to(&format!("/posts/{slug}")).into_response());
        }
    }
    let post = load_preview(&state.prismic, &slug).await?;
    Ok(render::preview::page(&state.config.site_name, &post, user.as_ref()).into_response())
}

/// Preview payload for a slug: the title, the content cut to its
/// first block, and the localized publication date.
pub async fn load_preview(prismic: &PrismicClient, slug: &str) -> Result<Post, WebError> {
    let document = prismic.get_by_uid(PUBLICATION_TYPE, slug).await?;
    Ok(Post::preview(slug, &document))
}
