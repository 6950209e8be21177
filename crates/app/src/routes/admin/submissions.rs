use dioxus::prelude::*;
use gateway::api;
use shared_types::{form_names, most_recent, AppError};
use shared_ui::{PageHeader, PageSubtitle, PageTitle, SkeletonRows};

use crate::components::SubmissionCard;
use crate::use_api;

/// Every client submission, newest first, labelled with its form's name.
#[component]
pub fn SubmissionsPage() -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let submissions = api::list_submissions(&api).await?;
            // Names are only labels; a failed form fetch should not hide submissions.
            let forms = match api::list_forms(&api).await {
                Ok(forms) => forms,
                Err(e) => {
                    tracing::warn!(error = %e, "form names unavailable");
                    Vec::new()
                }
            };
            Ok::<_, AppError>((form_names(&forms), submissions))
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Submissions" }
                PageSubtitle { "Answers and documents sent by clients" }
            }

            match &*data.read() {
                Some(Ok((names, submissions))) => {
                    let ordered = most_recent(submissions, submissions.len());
                    rsx! {
                        if ordered.is_empty() {
                            p { class: "empty-state", "No submissions yet." }
                        }
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
                    let message = e.friendly_message("Could not load submissions");
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
