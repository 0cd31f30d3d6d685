//! Publication list and the subscriber-gated full post.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use ignews_core::{PUBLICATION_TYPE, Post, PostSummary};
use tower_sessions::Session;

use crate::auth::session::{SessionPayload, session_user};
use crate::error::WebError;
use crate::prismic::PrismicClient;
use crate::render;
use crate::state::AppState;

/// `GET /posts` publication list.
pub async fn posts_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, WebError> {
    let user = session_user(&session).await;
    let posts = load_posts(&state.prismic).await?;
    Ok(render::posts::page(&state.config.site_name, &posts, user.as_ref()).into_response())
}

/// `GET /posts/{slug}` full post. Readers without an active
/// subscription are sent to the preview instead.
pub async fn post_page(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let user = session_user(&session).await;
    let subscribed = match &user {
        Some(user) => {
            let payload = state.hooks.session(SessionPayload::new(user.clone())).await;
            payload.active_subscription.is_some()
        }
        None => false,
    };
    if !subscribed {
        return Ok(Redirect::to(&format!("/posts/preview/{slug}")).into_response());
    }
    let post = load_post(&state.prismic, &slug).await?;
    Ok(render::post::page(&state.config.site_name, &post, user.as_ref()).into_response())
}

/// All publications mapped to list cards.
pub async fn load_posts(prismic: &PrismicClient) -> Result<Vec<PostSummary>, WebError> {
    let documents = prismic.query_publications().await?;
    Ok(documents.iter().map(PostSummary::from_document).collect())
}

/// One publication with its full content serialized.
pub async fn load_post(prismic: &PrismicClient, slug: &str) -> Result<Post, WebError> {
    let document = prismic.get_by_uid(PUBLICATION_TYPE, slug).await?;
    Ok(Post::full(slug, &document))
}
