//! OAuth endpoints: sign-in, provider callback, sign-out, session JSON.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_sessions::Session;

use crate::auth::github::{challenge_s256, generate_state, generate_verifier};
use crate::auth::session::{
    OAUTH_STATE_KEY, PKCE_VERIFIER_KEY, SessionPayload, SessionUser, USER_KEY, session_user,
};
use crate::error::WebError;
use crate::state::AppState;

/// `GET /api/auth/signin` starts the provider flow.
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, WebError> {
    let oauth_state = generate_state();
    let verifier = generate_verifier();
    session.insert(OAUTH_STATE_KEY, &oauth_state).await?;
    session.insert(PKCE_VERIFIER_KEY, &verifier).await?;

    let url = state
        .github
        .authorize_redirect(
            &state.config.callback_url(),
            &oauth_state,
            &challenge_s256(&verifier),
        )
        .map_err(anyhow::Error::new)?;
    Ok(Redirect::to(&url).into_response())
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub state: String,
    /// Provider-reported failure, e.g. the reader denied the consent
    /// screen.
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /api/auth/callback` finishes the provider flow.
///
/// Everything on this path fails toward rejection: a provider error, a
/// bad state, a failed exchange, a profile without an email, and a
/// store failure all surface as the access-denied page.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, WebError> {
    if let Some(error) = params.error {
        return Err(WebError::AccessDenied(error));
    }

    let expected: Option<String> = session.remove(OAUTH_STATE_KEY).await?;
    let verifier: Option<String> = session.remove(PKCE_VERIFIER_KEY).await?;
    let (Some(expected), Some(verifier)) = (expected, verifier) else {
        return Err(WebError::AccessDenied("no sign-in in progress".to_string()));
    };
    if params.state.is_empty() || params.state != expected {
        return Err(WebError::AccessDenied("state mismatch".to_string()));
    }

    let token = state
        .github
        .exchange_code(&params.code, &state.config.callback_url(), &verifier)
        .await
        .map_err(|e| WebError::AccessDenied(e.to_string()))?;
    let profile = state
        .github
        .fetch_user(&token)
        .await
        .map_err(|e| WebError::AccessDenied(e.to_string()))?;
    let Some(email) = profile.email.clone() else {
        return Err(WebError::AccessDenied(
            "no email on provider profile".to_string(),
        ));
    };

    match state.hooks.sign_in(&profile).await {
        Ok(true) => {}
        Ok(false) => return Err(WebError::AccessDenied("sign-in refused".to_string())),
        Err(error) => {
            tracing::warn!(error = %error, "sign-in hook failed");
            return Err(WebError::AccessDenied(
                "subscriber store unavailable".to_string(),
            ));
        }
    }

    let user = SessionUser {
        name: profile.name.clone(),
        email,
        image: profile.avatar_url.clone(),
    };
    session.cycle_id().await?;
    session.insert(USER_KEY, &user).await?;
    tracing::info!(login = %profile.login, "sign-in completed");
    Ok(Redirect::to("/").into_response())
}

/// `GET /api/auth/signout` drops the session.
pub async fn sign_out(session: Session) -> Result<Response, WebError> {
    session.flush().await?;
    Ok(Redirect::to("/").into_response())
}

/// `GET /api/auth/session` serves the current session as JSON,
/// enriched with the subscription record; `{}` when signed out.
pub async fn session_json(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Value>, WebError> {
    match session_user(&session).await {
        Some(user) => {
            let payload = state.hooks.session(SessionPayload::new(user)).await;
            Ok(Json(serde_json::to_value(payload).map_err(anyhow::Error::new)?))
        }
        None => Ok(Json(json!({}))),
    }
}
