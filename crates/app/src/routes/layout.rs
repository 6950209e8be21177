use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdInbox, LdLayoutDashboard, LdLogOut, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::auth::{sign_out, use_auth};
use crate::routes::Route;
use crate::use_api;

/// Admin shell: navigation on the left, page content on the right.
#[component]
pub fn AdminLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let api = use_api();
    let user_name = auth.user().map(|u| u.display_name()).unwrap_or_default();
    let dashboard_class = nav_class(matches!(route, Route::AdminHome {} | Route::AdminDashboard {}));
    let forms_class = nav_class(matches!(route, Route::AdminForms {}));
    let submissions_class = nav_class(matches!(route, Route::AdminSubmissions {}));
    let clients_class = nav_class(matches!(route, Route::AdminClients {}));

    let handle_logout = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            sign_out(&api, auth).await;
            navigator().replace(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "admin-shell",
            aside { class: "admin-nav",
                div { class: "brand", "Onboard Admin" }
                nav {
                    Link {
                        to: Route::AdminDashboard {},
                        class: "{dashboard_class}",
                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                        "Dashboard"
                    }
                    Link {
                        to: Route::AdminForms {},
                        class: "{forms_class}",
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Forms"
                    }
                    Link {
                        to: Route::AdminSubmissions {},
                        class: "{submissions_class}",
                        Icon::<LdInbox> { icon: LdInbox, width: 18, height: 18 }
                        "Submissions"
                    }
                    Link {
                        to: Route::AdminClients {},
                        class: "{clients_class}",
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Clients"
                    }
                }
                div { class: "nav-footer",
                    span { class: "nav-user", "{user_name}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Client shell: top bar with the brand, navigation and logout.
#[component]
pub fn ClientLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();
    let api = use_api();
    let user_name = auth.user().map(|u| u.display_name()).unwrap_or_default();
    let forms_class = nav_class(matches!(route, Route::FormsList {} | Route::FormsFill { .. }));
    let submissions_class = nav_class(matches!(route, Route::MySubmissions {}));

    let handle_logout = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            sign_out(&api, auth).await;
            navigator().replace(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "client-shell",
            header { class: "client-topbar",
                Link { to: Route::FormsList {}, class: "brand", "Onboard" }
                nav {
                    Link {
                        to: Route::FormsList {},
                        class: "{forms_class}",
                        "Forms"
                    }
                    Link {
                        to: Route::MySubmissions {},
                        class: "{submissions_class}",
                        "My Submissions"
                    }
                }
                div { class: "topbar-user",
                    span { class: "nav-user", "{user_name}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_logout,
                        "Logout"
                    }
                }
            }
            main { class: "client-main",
                Outlet::<Route> {}
            }
        }
    }
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "nav-link active"
    } else {
        "nav-link"
    }
}
