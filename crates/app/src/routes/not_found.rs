use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// 404 page. Links back to the visitor's home, or to sign-in.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let auth = use_auth();
    let path = format!("/{}", route.join("/"));
    let home = auth
        .role()
        .map(|role| Route::from(role.home()))
        .unwrap_or(Route::Login {});
    let link_text = if auth.is_authenticated() {
        "Back to home"
    } else {
        "Go to sign in"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "The page "
                    code { "{path}" }
                    " could not be found."
                }
                Link { to: home, class: "not-found-link", "{link_text}" }
            }
        }
    }
}
