//! Subscriber document-store client (FaunaDB v4 wire protocol).

pub mod expr;

use serde_json::Value;
use thiserror::Error;

use expr::Expr;

/// Index resolving users by case-folded email.
pub const USER_BY_EMAIL: &str = "userByEmail";
/// Index of subscriptions keyed by the owning user ref.
pub const SUBSCRIPTION_BY_USER_REF: &str = "subscriptionByUserRef";
/// Index of subscriptions keyed by status.
pub const SUBSCRIPTION_BY_STATUS: &str = "subscriptionByStatus";
/// Collection that stores sign-in users.
pub const USERS_COLLECTION: &str = "users";

#[derive(Debug, Error)]
pub enum FaunaError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The store evaluated the query and reported an error.
    #[error("query error {code}: {description}")]
    Query { code: String, description: String },
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

#[derive(Clone)]
pub struct FaunaClient {
    secret: String,
    endpoint: String,
    http: reqwest::Client,
}

impl FaunaClient {
    pub fn new(secret: &str, endpoint: &str) -> Self {
        Self {
            secret: secret.to_string(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Evaluates one expression. A success envelope yields its
    /// `resource`; an error envelope or a transport failure is an
    /// `Err`. There are no retries.
    pub async fn query(&self, expr: Expr) -> Result<Value, FaunaError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.secret)
            .header("X-FaunaDB-API-Version", "4")
            .json(&expr)
            .send()
            .await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if status.is_success() {
            return body
                .get("resource")
                .cloned()
                .ok_or_else(|| FaunaError::Unexpected("missing resource".to_string()));
        }
        match body.get("errors").and_then(Value::as_array).and_then(|e| e.first()) {
            Some(error) => Err(FaunaError::Query {
                code: error_field(error, "code"),
                description: error_field(error, "description"),
            }),
            None => Err(FaunaError::Unexpected(format!("status {status}"))),
        }
    }
}

fn error_field(error: &Value, name: &str) -> String {
    error
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
