use dioxus::prelude::*;
use gateway::api;
use shared_types::{FormId, FormSchema};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows,
};

use crate::routes::Route;
use crate::use_api;

#[component]
pub fn FormsListPage() -> Element {
    let api = use_api();

    let forms = use_resource(move || {
        let api = api.clone();
        async move { api::list_forms(&api).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./client.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Available forms" }
                PageSubtitle { "Choose a form to start your application" }
            }

            match &*forms.read() {
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "empty-state", "There are no forms to fill in right now." }
                },
                Some(Ok(list)) => rsx! {
                    div { class: "form-card-grid",
                        for (id, form) in list.iter().filter_map(|f| f.id.map(|id| (id, f.clone()))) {
                            FormCard { key: "{id}", id, form }
                        }
                    }
                },
                Some(Err(e)) => {
                    let message = e.friendly_message("Could not load forms");
                    rsx! {
                        div { class: "page-error", role: "alert", "{message}" }
                    }
                }
                None => rsx! {
                    SkeletonRows { count: 3 }
                },
            }
        }
    }
}

#[component]
fn FormCard(id: FormId, form: FormSchema) -> Element {
    let field_count = form.fields.len();
    let noun = if field_count == 1 { "question" } else { "questions" };

    rsx! {
        Link { to: Route::FormsFill { id }, class: "form-card-link",
            Card { class: "form-card",
                CardHeader {
                    CardTitle { "{form.name}" }
                    if !form.description.is_empty() {
                        CardDescription { "{form.description}" }
                    }
                }
                CardContent {
                    span { class: "form-card-count", "{field_count} {noun}" }
                }
                CardFooter {
                    span { class: "form-card-cta", "Start" }
                }
            }
        }
    }
}
