//! Environment-driven configuration.

use anyhow::{Context, Result};

/// Default bind address for local development.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// Public origin of the site, used for OAuth redirects.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_SITE_NAME: &str = "ig.news";
/// CMS repository API endpoint.
const DEFAULT_PRISMIC_API_URL: &str = "https://ignews.cdn.prismic.io/api/v2";
/// Hosted endpoint of the subscriber document store.
const DEFAULT_FAUNA_URL: &str = "https://db.fauna.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds.
    pub bind_addr: String,
    /// External origin of this site, without a trailing slash.
    pub base_url: String,
    pub site_name: String,
    /// GitHub OAuth application credentials.
    pub github_client_id: String,
    pub github_client_secret: String,
    /// Secret the session cookie signing key is derived from.
    pub session_secret: String,
    /// CMS repository endpoint, e.g. `https://<repo>.cdn.prismic.io/api/v2`.
    pub prismic_api_url: String,
    /// Server secret for the subscriber document store.
    pub fauna_secret: String,
    pub fauna_url: String,
}

impl Config {
    /// Loads configuration from the environment. The upstream
    /// credentials are required; everything else has a development
    /// default.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            bind_addr: env_or("IGNEWS_BIND_ADDR", DEFAULT_BIND_ADDR),
            base_url: env_or("IGNEWS_BASE_URL", DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            site_name: env_or("IGNEWS_SITE_NAME", DEFAULT_SITE_NAME),
            github_client_id: required("GITHUB_CLIENT_ID")?,
            github_client_secret: required("GITHUB_CLIENT_SECRET")?,
            session_secret: required("SESSION_SECRET")?,
            prismic_api_url: env_or("PRISMIC_API_URL", DEFAULT_PRISMIC_API_URL)
                .trim_end_matches('/')
                .to_string(),
            fauna_secret: required("FAUNA_SECRET")?,
            fauna_url: env_or("FAUNA_URL", DEFAULT_FAUNA_URL)
                .trim_end_matches('/')
                .to_string(),
        };

        tracing::info!(
            bind_addr = %config.bind_addr,
            base_url = %config.base_url,
            prismic_api_url = %config.prismic_api_url,
            fauna_url = %config.fauna_url,
            "configuration loaded"
        );
        Ok(config)
    }

    /// OAuth callback URL registered with the identity provider.
    pub fn callback_url(&self) -> String {
        format!("{}/api/auth/callback", self.base_url)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}
