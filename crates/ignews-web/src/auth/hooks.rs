//! Store-side callbacks of the sign-in flow.
//!
//! Both hooks run one expression against the subscriber store.
//! `sign_in` upserts the user record; `session` attaches the active
//! subscription, if any, to the outgoing payload. The session hook is
//! total: a store failure must read as "no subscription", never as an
//! error and never as access.

use serde_json::json;

use crate::auth::github::ProviderUser;
use crate::auth::session::SessionPayload;
use crate::fauna::expr::{self, Expr};
use crate::fauna::{
    FaunaClient, FaunaError, SUBSCRIPTION_BY_STATUS, SUBSCRIPTION_BY_USER_REF, USER_BY_EMAIL,
    USERS_COLLECTION,
};

fn user_by_email(email: &str) -> Expr {
    expr::match_(expr::index(USER_BY_EMAIL), expr::casefold(email))
}

/// Conditional create: new emails get a user record, existing emails
/// resolve to theirs. One round trip either way, no duplicates.
pub fn upsert_user_query(email: &str) -> Expr {
    expr::if_(
        expr::not(expr::exists(user_by_email(email))),
        expr::create(
            expr::collection(USERS_COLLECTION),
            expr::object(json!({"data": {"email": email}})),
        ),
        expr::get(user_by_email(email)),
    )
}

/// Subscription lookup: the user's subscriptions intersected with the
/// active ones.
pub fn active_subscription_query(email: &str) -> Expr {
    expr::get(expr::intersection([
        expr::match_(
            expr::index(SUBSCRIPTION_BY_USER_REF),
            expr::select("ref", expr::get(user_by_email(email))),
        ),
        expr::match_(expr::index(SUBSCRIPTION_BY_STATUS), "active"),
    ]))
}

#[derive(Clone)]
pub struct AuthHooks {
    store: FaunaClient,
}

impl AuthHooks {
    pub fn new(store: FaunaClient) -> Self {
        Self { store }
    }

    /// Accepts or rejects a sign-in. A profile without an email is
    /// refused outright; a store failure is an error the caller maps
    /// to rejection.
    pub async fn sign_in(&self, user: &ProviderUser) -> Result<bool, FaunaError> {
        let Some(email) = user.email.as_deref() else {
            return Ok(false);
        };
        self.store.query(upsert_user_query(email)).await?;
        Ok(true)
    }

    /// Attaches `activeSubscription` to a session payload. Lookup
    /// failures and missing subscriptions both leave it `None`.
    pub async fn session(&self, mut payload: SessionPayload) -> SessionPayload {
        match self
            .store
            .query(active_subscription_query(&payload.user.email))
            .await
        {
            Ok(record) => payload.active_subscription = Some(record),
            Err(error) => {
                tracing::debug!(error = %error, "subscription lookup came back empty");
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Router;
    use axum::extract::State;
    use axum::response::IntoResponse;
    use axum::routing::post;
    use serde_json::Value;

    use crate::auth::session::SessionUser;

    use super::*;

    fn reader() -> ProviderUser {
        ProviderUser {
            login: "reader".to_string(),
            name: Some("Reader".to_string()),
            email: Some("reader@example.com".to_string()),
            avatar_url: None,
        }
    }

    fn payload() -> SessionPayload {
        SessionPayload::new(SessionUser {
            name: Some("Reader".to_string()),
            email: "reader@example.com".to_string(),
            image: None,
        })
    }

    type Queries = Arc<Mutex<Vec<Value>>>;

    async fn spawn_store(response: (axum::http::StatusCode, Value), queries: Queries) -> String {
        let handler = move |State(queries): State<Queries>, axum::Json(body): axum::Json<Value>| {
            let response = response.clone();
            async move {
                queries.lock().unwrap().push(body);
                (response.0, axum::Json(response.1)).into_response()
            }
        };
        let router = Router::new().route("/", post(handler)).with_state(queries);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}")
    }

    #[test]
    fn upsert_query_wire_shape() {
        let email_match = json!({
            "match": {"index": "userByEmail"},
            "terms": {"casefold": "reader@example.com"}
        });
        assert_eq!(
            serde_json::to_value(upsert_user_query("reader@example.com")).unwrap(),
            json!({
                "if": {"not": {"exists": email_match}},
                "then": {
                    "create": {"collection": "users"},
                    "params": {"object": {"data": {"object": {"email": "reader@example.com"}}}}
                },
                "else": {"get": email_match}
            })
        );
    }

    #[test]
    fn subscription_query_wire_shape() {
        let email_match = json!({
            "match": {"index": "userByEmail"},
            "terms": {"casefold": "reader@example.com"}
        });
        assert_eq!(
            serde_json::to_value(active_subscription_query("reader@example.com")).unwrap(),
            json!({
                "get": {"intersection": [
                    {
                        "match": {"index": "subscriptionByUserRef"},
                        "terms": {"select": "ref", "from": {"get": email_match}}
                    },
                    {"match": {"index": "subscriptionByStatus"}, "terms": "active"}
                ]}
            })
        );
    }

    #[tokio::test]
    async fn sign_in_runs_exactly_one_conditional_create() {
        let queries: Queries = Arc::new(Mutex::new(Vec::new()));
        let endpoint = spawn_store(
            (axum::http::StatusCode::OK, json!({"resource": {"ref": {"id": "1"}}})),
            queries.clone(),
        )
        .await;
        let hooks = AuthHooks::new(FaunaClient::new("secret", &endpoint));

        assert!(hooks.sign_in(&reader()).await.unwrap());
        assert!(hooks.sign_in(&reader()).await.unwrap());

        let queries = queries.lock().unwrap();
        assert_eq!(queries.len(), 2);
        let expected = serde_json::to_value(upsert_user_query("reader@example.com")).unwrap();
        assert_eq!(queries[0], expected);
        assert_eq!(queries[1], expected);
    }

    #[tokio::test]
    async fn sign_in_without_email_is_refused_without_a_store_call() {
        let hooks = AuthHooks::new(FaunaClient::new("secret", "http://127.0.0.1:1"));
        let mut user = reader();
        user.email = None;
        assert!(!hooks.sign_in(&user).await.unwrap());
    }

    #[tokio::test]
    async fn sign_in_store_failure_is_an_error() {
        let queries: Queries = Arc::new(Mutex::new(Vec::new()));
        let endpoint = spawn_store(
            (
                axum::http::StatusCode::UNAUTHORIZED,
                json!({"errors": [{"code": "unauthorized", "description": "Unauthorized"}]}),
            ),
            queries,
        )
        .await;
        let hooks = AuthHooks::new(FaunaClient::new("bad-secret", &endpoint));

        assert!(hooks.sign_in(&reader()).await.is_err());
    }

    #[tokio::test]
    async fn session_attaches_the_subscription_record() {
        let queries: Queries = Arc::new(Mutex::new(Vec::new()));
        let record = json!({"ref": {"id": "sub-1"}, "data": {"status": "active"}});
        let endpoint = spawn_store(
            (axum::http::StatusCode::OK, json!({"resource": record})),
            queries.clone(),
        )
        .await;
        let hooks = AuthHooks::new(FaunaClient::new("secret", &endpoint));

        let enriched = hooks.session(payload()).await;
        assert_eq!(enriched.active_subscription, Some(record));
        assert_eq!(
            queries.lock().unwrap()[0],
            serde_json::to_value(active_subscription_query("reader@example.com")).unwrap()
        );
    }

    #[tokio::test]
    async fn session_normalizes_store_misses_to_none() {
        let queries: Queries = Arc::new(Mutex::new(Vec::new()));
        let endpoint = spawn_store(
            (
                axum::http::StatusCode::NOT_FOUND,
                json!({"errors": [{"code": "instance not found", "description": "Set not found."}]}),
            ),
            queries,
        )
        .await;
        let hooks = AuthHooks::new(FaunaClient::new("secret", &endpoint));

        let enriched = hooks.session(payload()).await;
        assert_eq!(enriched.active_subscription, None);
    }

    #[tokio::test]
    async fn session_normalizes_transport_failures_to_none() {
        let hooks = AuthHooks::new(FaunaClient::new("secret", "http://127.0.0.1:1"));
        let enriched = hooks.session(payload()).await;
        assert_eq!(enriched.active_subscription, None);
        assert_eq!(enriched.user.email, "reader@example.com");
    }
}
