//! Shared layout pieces: page shell, header, error page, styles.

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::auth::session::SessionUser;

/// Site-wide styles. The ig.news palette: near-black shell, yellow
/// accent, cyan highlight.
pub const PAGE_CSS: &str = r#"
:root{--gray-850:#121214;--gray-700:#323238;--gray-300:#a8a8b3;--gray-100:#e1e1e6;--yellow-500:#eba417;--cyan-500:#61dafb;--white:#fff}
*{margin:0;padding:0;box-sizing:border-box}
body{background:var(--gray-850);color:var(--gray-100);font-family:Roboto,-apple-system,'Segoe UI',sans-serif}
a{text-decoration:none;color:inherit}
.site-header{height:5rem;border-bottom:1px solid var(--gray-700)}
.header-content{max-width:1120px;height:5rem;margin:0 auto;padding:0 2rem;display:flex;align-items:center}
.logo{font-size:1.75rem;font-weight:800;color:var(--white)}
.logo span{color:var(--yellow-500)}
.site-header nav{margin-left:5rem;height:5rem}
.nav-link{display:inline-flex;align-items:center;height:5rem;padding:0 .5rem;margin-right:2rem;color:var(--gray-300);position:relative}
.nav-link:hover{color:var(--white)}
.nav-link.active{color:var(--white);font-weight:700}
.nav-link.active::after{content:'';height:3px;border-radius:3px 3px 0 0;width:100%;position:absolute;bottom:1px;left:0;background:var(--yellow-500)}
.account{margin-left:auto;display:flex;align-items:center;gap:1rem}
.account-name{color:var(--gray-300)}
.sign-button{display:inline-flex;align-items:center;height:3rem;border-radius:3rem;background:var(--gray-700);color:var(--white);padding:0 1.5rem;font-weight:700}
.sign-button:hover{filter:brightness(.9)}
.hero{max-width:1120px;margin:0 auto;padding:0 2rem;display:flex;align-items:center;height:calc(100vh - 5rem)}
.hero section{max-width:600px}
.wave{font-size:1.5rem;font-weight:700}
.hero h1{font-size:4.5rem;line-height:4.5rem;font-weight:900;margin-top:2.5rem;color:var(--white)}
.hero .accent{color:var(--cyan-500)}
.hero p{font-size:1.5rem;line-height:2.25rem;margin-top:1.5rem}
.price{color:var(--yellow-500);font-weight:700}
.subscribe-button{display:inline-flex;align-items:center;justify-content:center;height:4rem;padding:0 2.5rem;margin-top:2.5rem;border-radius:4rem;background:var(--yellow-500);color:var(--gray-850);font-weight:700;font-size:1.25rem}
.subscribe-button:hover{filter:brightness(.9)}
.container{max-width:1120px;margin:0 auto;padding:0 2rem}
.posts{max-width:720px;margin:5rem auto;display:flex;flex-direction:column;gap:2rem}
.posts a{display:block}
.posts time{font-size:1rem;color:var(--gray-300)}
.posts strong{display:block;font-size:1.75rem;color:var(--white);margin-top:1rem;line-height:2.25rem}
.posts a:hover strong{color:var(--yellow-500)}
.posts p{color:var(--gray-300);margin-top:.5rem;line-height:1.625rem}
.empty{color:var(--gray-300);text-align:center}
.post{max-width:720px;margin:5rem auto}
.post h1{font-size:3.5rem;color:var(--white);line-height:4rem}
.post time{display:block;font-size:1rem;color:var(--gray-300);margin-top:1.5rem}
.post-content{margin-top:2rem;line-height:2rem;font-size:1.125rem;color:var(--gray-100)}
.post-content p,.post-content ul,.post-content ol,.post-content pre{margin:1.5rem 0}
.post-content li{margin-left:1.5rem}
.post-content h2,.post-content h3{margin-top:2.5rem;color:var(--white)}
.post-content img{max-width:100%}
.preview-content{background:linear-gradient(var(--gray-100),transparent);-webkit-background-clip:text;background-clip:text;color:transparent}
.continue-reading{padding:2rem;text-align:center;background:var(--gray-700);border-radius:.5rem;margin:2rem 0;font-size:1.25rem;font-weight:700}
.continue-reading a{color:var(--yellow-500);margin-left:.5rem}
.continue-reading a:hover{text-decoration:underline}
"#;

/// Compact error-page styles, independent of the site shell.
pub const ERROR_CSS: &str = r#"
body{background:#121214;color:#e1e1e6;font-family:Roboto,-apple-system,'Segoe UI',sans-serif;display:flex;align-items:center;justify-content:center;min-height:100vh}
.error{text-align:center}
.error .status{font-size:1.25rem;color:#a8a8b3}
.error h1{font-size:2.5rem;color:#fff;margin:.5rem 0 1.5rem}
.error a{color:#eba417;font-weight:700;text-decoration:none}
.error a:hover{text-decoration:underline}
"#;

/// Document shell shared by every page.
pub fn page_shell(title: &str, description: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body)
            }
        }
    }
}

/// Top navigation. `current_path` drives the active highlight; the
/// match is exact, so `/posts/preview/x` does not light up `Posts`.
pub fn header(current_path: &str, user: Option<&SessionUser>) -> Markup {
    html! {
        header class="site-header" {
            div class="header-content" {
                a class="logo" href="/" { "ig" span { "." } "news" }
                nav {
                    (nav_link("/", "Home", current_path))
                    (nav_link("/posts", "Posts", current_path))
                }
                div class="account" {
                    @if let Some(user) = user {
                        span class="account-name" { (display_name(user)) }
                        a class="sign-button" href="/api/auth/signout" { "Sign out" }
                    } @else {
                        a class="sign-button" href="/api/auth/signin" { "Sign in with GitHub" }
                    }
                }
            }
        }
    }
}

fn nav_link(href: &str, label: &str, current_path: &str) -> Markup {
    let class = if current_path == href {
        "nav-link active"
    } else {
        "nav-link"
    };
    html! {
        a class=(class) href=(href) { (label) }
    }
}

/// Name shown in the header; falls back to the email's local part.
pub fn display_name(user: &SessionUser) -> &str {
    match user.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => user.email.split('@').next().unwrap_or(&user.email),
    }
}

/// Standalone error page, deliberately free of upstream detail.
pub fn error_page(status: StatusCode, headline: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { (headline) " | ig.news" }
                style { (PreEscaped(ERROR_CSS)) }
            }
            body {
                main class="error" {
                    p class="status" { (status.as_u16()) }
                    h1 { (headline) }
                    a href="/" { "Back to home" }
                }
            }
        }
    }
}
