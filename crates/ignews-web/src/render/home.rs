//! Landing page.

use maud::{Markup, html};

use crate::auth::session::SessionUser;

use super::components::{header, page_shell};

pub fn page(site_name: &str, user: Option<&SessionUser>) -> Markup {
    let body = html! {
        (header("/", user))
        main class="hero" {
            section {
                span class="wave" { "👏 Hey, welcome" }
                h1 { "News about the " span class="accent" { "React" } " world." }
                p {
                    "Get access to all the publications"
                    br;
                    span class="price" { "for $9.90 month" }
                }
                a class="subscribe-button" href="/posts" { "Subscribe now 🤗" }
            }
        }
    };
    page_shell(
        &format!("Home | {site_name}"),
        "News about the React world.",
        body,
    )
}
