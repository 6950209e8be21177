pub mod admin;
pub mod client;
pub mod guards;
pub mod layout;
pub mod login;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::{Destination, FormId};

use guards::{AdminGuard, ClientGuard, PublicOnly};
use layout::{AdminLayout, ClientLayout};
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PublicOnly)]
        #[route("/login")]
        Login {},
    #[end_layout]

    #[layout(AdminGuard)]
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminHome {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/admin/forms")]
        AdminForms {},
        #[route("/admin/submissions")]
        AdminSubmissions {},
        #[route("/admin/clients")]
        AdminClients {},
    #[end_layout]
    #[end_layout]

    #[layout(ClientGuard)]
    #[layout(ClientLayout)]
        #[route("/")]
        FormsList {},
        #[route("/forms/:id")]
        FormsFill { id: FormId },
        #[route("/my-submissions")]
        MySubmissions {},
    #[end_layout]
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::AdminHome => Route::AdminDashboard {},
            Destination::ClientHome => Route::FormsList {},
        }
    }
}

#[component]
fn Login() -> Element {
    login::LoginPage()
}

#[component]
fn AdminHome() -> Element {
    admin::dashboard::DashboardPage()
}

#[component]
fn AdminDashboard() -> Element {
    admin::dashboard::DashboardPage()
}

#[component]
fn AdminForms() -> Element {
    admin::forms::FormsPage()
}

#[component]
fn AdminSubmissions() -> Element {
    admin::submissions::SubmissionsPage()
}

#[component]
fn AdminClients() -> Element {
    admin::clients::ClientsPage()
}

#[component]
fn FormsList() -> Element {
    client::forms_list::FormsListPage()
}

#[component]
fn FormsFill(id: FormId) -> Element {
    rsx! {
        client::forms_fill::FormsFillPage { key: "{id}", id }
    }
}

#[component]
fn MySubmissions() -> Element {
    client::my_submissions::MySubmissionsPage()
}
