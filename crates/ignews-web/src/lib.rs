//! ig.news: subscription-gated publication site.
//!
//! A server-rendered front-end over two upstream services: a headless
//! CMS holding the publications and a document store holding users and
//! subscriptions. GitHub OAuth signs readers in; an active
//! subscription unlocks full posts, everyone else gets previews.

pub mod auth;
pub mod config;
pub mod error;
pub mod fauna;
pub mod prismic;
pub mod render;
pub mod routes;
pub mod state;
