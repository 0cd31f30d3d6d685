//! Cookie-session plumbing and the session payload contract.

use chrono::{Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha512};
use tower_sessions::cookie::Key;
use tower_sessions::cookie::time;
use tower_sessions::service::SignedCookie;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::Config;

/// Session key holding the signed-in [`SessionUser`].
pub const USER_KEY: &str = "auth.user";
/// Session key holding the in-flight OAuth state nonce.
pub const OAUTH_STATE_KEY: &str = "auth.oauth_state";
/// Session key holding the in-flight PKCE verifier.
pub const PKCE_VERIFIER_KEY: &str = "auth.pkce_verifier";

const SESSION_COOKIE: &str = "ignews.session";
/// Rolling session lifetime; `expires` in the payload tracks it.
pub const SESSION_TTL_DAYS: i64 = 30;

/// Identity-provider fields kept in the session after sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
}

/// The session object handed to clients: the standard user/expiry pair
/// plus exactly one appended field carrying the subscription record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPayload {
    pub user: SessionUser,
    pub expires: String,
    #[serde(rename = "activeSubscription")]
    pub active_subscription: Option<Value>,
}

impl SessionPayload {
    /// Base payload for one read: a fresh expiry, no subscription
    /// attached yet. Sessions are reissued on every read, so the
    /// expiry always counts from now.
    pub fn new(user: SessionUser) -> Self {
        let expires = (Utc::now() + Duration::days(SESSION_TTL_DAYS))
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        Self {
            user,
            expires,
            active_subscription: None,
        }
    }
}

/// Session middleware: in-memory store, signed cookie, rolling expiry.
/// The signing key is derived from the configured session secret.
pub fn session_layer(config: &Config) -> SessionManagerLayer<MemoryStore, SignedCookie> {
    let key = Key::from(Sha512::digest(config.session_secret.as_bytes()).as_slice());
    SessionManagerLayer::new(MemoryStore::default())
        .with_signed(key)
        .with_name(SESSION_COOKIE)
        .with_secure(config.base_url.starts_with("https://"))
        .with_expiry(Expiry::OnInactivity(time::Duration::days(SESSION_TTL_DAYS)))
}

/// Signed-in user for this request, if any. Session-store trouble
/// reads as signed out rather than failing the page.
pub async fn session_user(session: &Session) -> Option<SessionUser> {
    session.get::<SessionUser>(USER_KEY).await.ok().flatten()
}
