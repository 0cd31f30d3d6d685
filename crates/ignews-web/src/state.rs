//! Shared application state.

use std::sync::Arc;

use crate::auth::github::GithubProvider;
use crate::auth::hooks::AuthHooks;
use crate::config::Config;
use crate::fauna::FaunaClient;
use crate::prismic::PrismicClient;

/// Handles shared across request handlers. Everything is cheap to
/// clone; the HTTP clients pool connections internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub prismic: PrismicClient,
    pub github: GithubProvider,
    pub hooks: AuthHooks,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let prismic = PrismicClient::new(&config.prismic_api_url);
        let github = GithubProvider::new(&config.github_client_id, &config.github_client_secret);
        let hooks = AuthHooks::new(FaunaClient::new(&config.fauna_secret, &config.fauna_url));
        Self {
            config: Arc::new(config),
            prismic,
            github,
            hooks,
        }
    }
}
