//! Layouts that decide whether a route may render for the current session.

use dioxus::prelude::*;
use shared_types::{guard, Access, UserRole};

use crate::auth::use_auth;
use crate::routes::Route;

/// Only for signed-out visitors; signed-in users go to their home page.
#[component]
pub fn PublicOnly() -> Element {
    let auth = use_auth();
    apply(guard::public_only(&auth.session()))
}

#[component]
pub fn AdminGuard() -> Element {
    let auth = use_auth();
    apply(guard::protected(&auth.session(), Some(&[UserRole::Admin])))
}

#[component]
pub fn ClientGuard() -> Element {
    let auth = use_auth();
    apply(guard::protected(&auth.session(), Some(&[UserRole::Client])))
}

fn apply(access: Access) -> Element {
    match access {
        Access::Render => rsx! { Outlet::<Route> {} },
        Access::Redirect(destination) => {
            tracing::debug!(to = destination.path(), "route guard redirect");
            navigator().replace(Route::from(destination));
            rsx! {
                div { class: "guard-redirect",
                    p { "Redirecting..." }
                }
            }
        }
    }
}
