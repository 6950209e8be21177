use dioxus::prelude::*;
use gateway::api;
use shared_types::{form_names, most_recent, AppError};
use shared_ui::{PageHeader, PageSubtitle, PageTitle, SkeletonRows};

use crate::components::SubmissionCard;
use crate::routes::Route;
use crate::use_api;

/// The signed-in client's submissions; the backend scopes the list to the session.
#[component]
pub fn MySubmissionsPage() -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let submissions = api::list_submissions(&api).await?;
            let forms = api::list_forms(&api).await.unwrap_or_default();
            Ok::<_, AppError>((form_names(&forms), submissions))
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./client.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "My submissions" }
                PageSubtitle { "Everything you have sent us" }
            }

            match &*data.read() {
                Some(Ok((_, submissions))) if submissions.is_empty() => rsx! {
                    div { class: "empty-state",
                        "You have not submitted anything yet. "
                        Link { to: Route::FormsList {}, "Browse forms" }
                    }
                },
                Some(Ok((names, submissions))) => {
                    let ordered = most_recent(submissions, submissions.len());
                    rsx! {
                        for sub in ordered {
                            SubmissionCard {
                                key: "{sub.id}",
                                form_name: names.get(&sub.form).cloned(),
                                submission: sub.clone(),
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    let message = e.friendly_message("Could not load your submissions");
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
