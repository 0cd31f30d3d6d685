//! Publication list page.

use ignews_core::PostSummary;
use maud::{Markup, html};

use crate::auth::session::SessionUser;

use super::components::{header, page_shell};

pub fn page(site_name: &str, posts: &[PostSummary], user: Option<&SessionUser>) -> Markup {
    let body = html! {
        (header("/posts", user))
        main class="container" {
            div class="posts" {
                @if posts.is_empty() {
                    p class="empty" { "No publications yet." }
                }
                @for post in posts {
                    a href={ "/posts/preview/" (post.slug) } {
                        time { (post.updated_at) }
                        strong { (post.title) }
                        p { (post.excerpt) }
                    }
                }
            }
        }
    };
    page_shell(&format!("Posts | {site_name}"), "Publications", body)
}
