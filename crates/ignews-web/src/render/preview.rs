//! Post preview, the page non-subscribers see.

use ignews_core::Post;
use maud::{Markup, PreEscaped, html};

use crate::auth::session::SessionUser;

use super::components::{header, page_shell};

pub fn page(site_name: &str, post: &Post, user: Option<&SessionUser>) -> Markup {
    let path = format!("/posts/preview/{}", post.slug);
    let body = html! {
        (header(&path, user))
        main class="container" {
            article class="post" {
                h1 { (post.title) }
                time { (post.updated_at) }
                div class="post-content preview-content" { (PreEscaped(&post.content)) }
                div class="continue-reading" {
                    "Wanna continue reading?"
                    a href="/" { "Subscribe now 🤗" }
                }
            }
        }
    };
    page_shell(&format!("{} | {site_name}", post.title), "", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> Post {
        Post {
            slug: "my-new-post".to_string(),
            title: "My New Post".to_string(),
            content: "<p>Post excerpt</p>".to_string(),
            updated_at: "01 de abril de 2021".to_string(),
        }
    }

    #[test]
    fn preview_shows_title_excerpt_and_prompt() {
        let rendered = page("ig.news", &preview(), None).into_string();
        assert!(rendered.contains("<h1>My New Post</h1>"));
        assert!(rendered.contains("<p>Post excerpt</p>"));
        assert!(rendered.contains("Wanna continue reading?"));
        assert!(rendered.contains("Subscribe now"));
    }

    #[test]
    fn subscribe_link_points_home() {
        let rendered = page("ig.news", &preview(), None).into_string();
        assert!(rendered.contains("class=\"continue-reading\""));
        assert!(rendered.contains("href=\"/\">Subscribe now"));
    }
}
