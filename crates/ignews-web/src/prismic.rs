//! Headless-CMS client (Prismic API v2).
//!
//! Handles are cheap and stateless: every query resolves the
//! repository's current master ref and then hits the search endpoint,
//! matching the upstream client's fresh-handle-per-invocation
//! behavior. Fetch failures propagate to the caller; pages have no
//! local recovery for missing content.

use ignews_core::{Document, PUBLICATION_TYPE};
use serde::Deserialize;
use thiserror::Error;

/// Field projection requested for publication queries.
const FETCH_FIELDS: &str = "publication.title,publication.content";
/// Publications fetched per list query. There is no pagination beyond
/// this.
const PAGE_SIZE: u32 = 100;

#[derive(Debug, Error)]
pub enum PrismicError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("api error: status {0}")]
    Api(reqwest::StatusCode),
    #[error("no master ref in repository metadata")]
    MissingMasterRef,
    #[error("document not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Deserialize)]
struct ApiInfo {
    #[serde(default)]
    refs: Vec<ApiRef>,
}

#[derive(Debug, Deserialize)]
struct ApiRef {
    #[serde(rename = "ref")]
    reference: String,
    #[serde(rename = "isMasterRef", default)]
    is_master_ref: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Document>,
}

#[derive(Clone)]
pub struct PrismicClient {
    api_url: String,
    http: reqwest::Client,
}

impl PrismicClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Current master ref of the repository.
    async fn master_ref(&self) -> Result<String, PrismicError> {
        let response = self.http.get(&self.api_url).send().await?;
        if !response.status().is_success() {
            return Err(PrismicError::Api(response.status()));
        }
        let info: ApiInfo = response.json().await?;
        info.refs
            .into_iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference)
            .ok_or(PrismicError::MissingMasterRef)
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<Vec<Document>, PrismicError> {
        let reference = self.master_ref().await?;
        let url = format!("{}/documents/search", self.api_url);
        let mut query: Vec<(&str, &str)> = vec![("ref", reference.as_str())];
        query.extend_from_slice(params);
        let response = self.http.get(&url).query(&query).send().await?;
        if !response.status().is_success() {
            return Err(PrismicError::Api(response.status()));
        }
        let body: SearchResponse = response.json().await?;
        tracing::debug!(results = body.results.len(), "prismic search response");
        Ok(body.results)
    }

    /// All publications, in repository order, with the title/content
    /// projection the site renders.
    pub async fn query_publications(&self) -> Result<Vec<Document>, PrismicError> {
        let predicate = format!("[[at(document.type,\"{PUBLICATION_TYPE}\")]]");
        let page_size = PAGE_SIZE.to_string();
        self.search(&[
            ("q", predicate.as_str()),
            ("fetch", FETCH_FIELDS),
            ("pageSize", page_size.as_str()),
        ])
        .await
    }

    /// Single document by uid.
    pub async fn get_by_uid(&self, doc_type: &str, uid: &str) -> Result<Document, PrismicError> {
        let predicate = format!("[[at(my.{doc_type}.uid,\"{uid}\")]]");
        let results = self
            .search(&[("q", predicate.as_str()), ("pageSize", "1")])
            .await?;
        results
            .into_iter()
            .next()
            .ok_or_else(|| PrismicError::NotFound(uid.to_string()))
    }
}
