//! Full post page, visible to subscribers.

use ignews_core::Post;
use maud::{Markup, PreEscaped, html};

use crate::auth::session::SessionUser;

use super::components::{header, page_shell};

pub fn page(site_name: &str, post: &Post, user: Option<&SessionUser>) -> Markup {
    let path = format!("/posts/{}", post.slug);
    let body = html! {
        (header(&path, user))
        main class="container" {
            article class="post" {
                h1 { (post.title) }
                time { (post.updated_at) }
                div class="post-content" { (PreEscaped(&post.content)) }
            }
        }
    };
    page_shell(&format!("{} | {site_name}", post.title), "", body)
}
