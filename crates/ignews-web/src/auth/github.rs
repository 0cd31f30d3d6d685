//! GitHub OAuth provider.
//!
//! Authorization requests carry both a `state` nonce and a PKCE S256
//! challenge; the callback exchange sends the matching verifier.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";
/// Scope needed to read the signed-in user's profile.
const SCOPE: &str = "read:user";
const USER_AGENT: &str = concat!("ignews/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The provider answered with an OAuth error payload.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Profile subset read from the provider after sign-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Clone)]
pub struct GithubProvider {
    client_id: String,
    client_secret: String,
    authorize_url: String,
    token_url: String,
    user_url: String,
    http: reqwest::Client,
}

impl GithubProvider {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
            user_url: USER_URL.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Points the provider endpoints somewhere else. Tests run the
    /// flow against local stubs through this.
    pub fn with_endpoints(mut self, authorize_url: &str, token_url: &str, user_url: &str) -> Self {
        self.authorize_url = authorize_url.to_string();
        self.token_url = token_url.to_string();
        self.user_url = user_url.to_string();
        self
    }

    /// Full authorization redirect URL for one sign-in attempt.
    pub fn authorize_redirect(
        &self,
        redirect_uri: &str,
        state: &str,
        code_challenge: &str,
    ) -> Result<String, AuthError> {
        let url = reqwest::Url::parse_with_params(
            &self.authorize_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", redirect_uri),
                ("scope", SCOPE),
                ("state", state),
                ("code_challenge", code_challenge),
                ("code_challenge_method", "S256"),
            ],
        )
        .map_err(|e| AuthError::Provider(format!("bad authorize url: {e}")))?;
        Ok(url.into())
    }

    /// Exchanges the callback code for an access token.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        verifier: &str,
    ) -> Result<String, AuthError> {
        let response = self
            .http
            .post(&self.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("code_verifier", verifier),
            ])
            .send()
            .await?;
        let token: TokenResponse = response.json().await?;
        if let Some(error) = token.error {
            let detail = token.error_description.unwrap_or_default();
            return Err(AuthError::Provider(format!("{error}: {detail}")));
        }
        token
            .access_token
            .ok_or_else(|| AuthError::Provider("no access token in response".to_string()))
    }

    /// Fetches the signed-in user's profile.
    pub async fn fetch_user(&self, access_token: &str) -> Result<ProviderUser, AuthError> {
        let response = self
            .http
            .get(&self.user_url)
            .bearer_auth(access_token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::Provider(format!(
                "user fetch failed: {}",
                response.status()
            )));
        }
        Ok(response.json().await?)
    }
}

/// Random URL-safe nonce for the OAuth `state` parameter.
pub fn generate_state() -> String {
    random_token()
}

/// Random PKCE code verifier.
pub fn generate_verifier() -> String {
    random_token()
}

/// S256 challenge for a verifier, RFC 7636 style.
pub fn challenge_s256(verifier: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()))
}

fn random_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::{get, post};
    use serde_json::json;

    use super::*;

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    #[test]
    fn challenge_matches_rfc7636_vector() {
        assert_eq!(
            challenge_s256("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn tokens_are_url_safe_and_distinct() {
        let a = generate_state();
        let b = generate_state();
        assert_ne!(a, b);
        assert_eq!(a.len(), 43);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn authorize_redirect_carries_the_flow_parameters() {
        let provider = GithubProvider::new("client-id", "client-secret");
        let url = provider
            .authorize_redirect("http://localhost:3000/api/auth/callback", "state-1", "challenge-1")
            .unwrap();
        let parsed = reqwest::Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(pairs.contains(&("client_id".to_string(), "client-id".to_string())));
        assert!(pairs.contains(&("scope".to_string(), "read:user".to_string())));
        assert!(pairs.contains(&("state".to_string(), "state-1".to_string())));
        assert!(pairs.contains(&("code_challenge".to_string(), "challenge-1".to_string())));
        assert!(pairs.contains(&("code_challenge_method".to_string(), "S256".to_string())));
        assert!(pairs.contains(&(
            "redirect_uri".to_string(),
            "http://localhost:3000/api/auth/callback".to_string()
        )));
    }

    #[tokio::test]
    async fn exchange_code_reads_the_token() {
        let router = Router::new().route(
            "/token",
            post(|| async {
                axum::Json(json!({"access_token": "gho_test", "token_type": "bearer", "scope": "read:user"}))
            }),
        );
        let base = spawn(router).await;
        let provider =
            GithubProvider::new("id", "secret").with_endpoints("http://unused", &format!("{base}/token"), "http://unused");

        let token = provider
            .exchange_code("code-1", "http://localhost:3000/api/auth/callback", "verifier")
            .await
            .unwrap();
        assert_eq!(token, "gho_test");
    }

    #[tokio::test]
    async fn exchange_code_surfaces_provider_errors() {
        let router = Router::new().route(
            "/token",
            post(|| async {
                axum::Json(json!({"error": "bad_verification_code", "error_description": "The code is incorrect."}))
            }),
        );
        let base = spawn(router).await;
        let provider =
            GithubProvider::new("id", "secret").with_endpoints("http://unused", &format!("{base}/token"), "http://unused");

        let error = provider
            .exchange_code("stale", "http://localhost:3000/api/auth/callback", "verifier")
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            AuthError::Provider(message) if message.starts_with("bad_verification_code")
        ));
    }

    #[tokio::test]
    async fn fetch_user_reads_the_profile() {
        let router = Router::new().route(
            "/user",
            get(|| async {
                axum::Json(json!({
                    "login": "reader",
                    "name": "Reader Example",
                    "email": "reader@example.com",
                    "avatar_url": "https://avatars.example.com/reader.png"
                }))
            }),
        );
        let base = spawn(router).await;
        let provider =
            GithubProvider::new("id", "secret").with_endpoints("http://unused", "http://unused", &format!("{base}/user"));

        let user = provider.fetch_user("gho_test").await.unwrap();
        assert_eq!(
            user,
            ProviderUser {
                login: "reader".to_string(),
                name: Some("Reader Example".to_string()),
                email: Some("reader@example.com".to_string()),
                avatar_url: Some("https://avatars.example.com/reader.png".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn fetch_user_rejects_bad_tokens() {
        let router = Router::new().route(
            "/user",
            get(|| async { (axum::http::StatusCode::UNAUTHORIZED, "bad credentials") }),
        );
        let base = spawn(router).await;
        let provider =
            GithubProvider::new("id", "secret").with_endpoints("http://unused", "http://unused", &format!("{base}/user"));

        let error = provider.fetch_user("expired").await.unwrap_err();
        assert!(matches!(error, AuthError::Provider(_)));
    }
}
