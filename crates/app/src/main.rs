use dioxus::prelude::*;
use gateway::ApiClient;

mod auth;
mod components;
mod format_helpers;
mod notify;
mod routes;
mod storage;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// The configured backend client, provided at the root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn App() -> Element {
    let client = use_hook(|| ApiClient::new(gateway::config::load().clone()));

    match client {
        Ok(client) => rsx! {
            Shell { client }
        },
        Err(e) => {
            tracing::error!(error = %e, "cannot start without a valid API configuration");
            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                div { class: "fatal-error",
                    h1 { "Configuration error" }
                    p { "{e.message}" }
                }
            }
        }
    }
}

/// Provides the API client and the auth session to every route.
#[component]
fn Shell(client: ApiClient) -> Element {
    use_context_provider(|| client.clone());
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
