use dioxus::prelude::*;
use gateway::api;
use shared_types::{form_names, most_recent, AppError, FormSchema, Submission};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows,
};

use crate::components::SubmissionCard;
use crate::routes::Route;
use crate::use_api;

const RECENT_LIMIT: usize = 5;

#[component]
pub fn DashboardPage() -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let forms = api::list_forms(&api).await?;
            let submissions = api::list_submissions(&api).await?;
            Ok::<_, AppError>((forms, submissions))
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Dashboard" }
                PageSubtitle { "Forms and client activity at a glance" }
            }

            match &*data.read() {
                Some(Ok((forms, submissions))) => rsx! {
                    Overview { forms: forms.clone(), submissions: submissions.clone() }
                },
                Some(Err(e)) => {
                    let message = e.friendly_message("Could not load the dashboard");
                    rsx! {
                        div { class: "page-error", role: "alert", "{message}" }
                    }
                }
                None => rsx! {
                    SkeletonRows { count: 4 }
                },
            }
        }
    }
}

#[component]
fn Overview(forms: Vec<FormSchema>, submissions: Vec<Submission>) -> Element {
    let form_count = forms.len();
    let submission_count = submissions.len();
    let names = form_names(&forms);
    let recent = most_recent(&submissions, RECENT_LIMIT);

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Forms", value: form_count, to: Route::AdminForms {} }
            StatCard { label: "Submissions", value: submission_count, to: Route::AdminSubmissions {} }
        }

        section { class: "dashboard-recent",
            h2 { class: "section-title", "Recent submissions" }
            if recent.is_empty() {
                p { class: "empty-state", "No submissions yet." }
            }
            for sub in recent {
                SubmissionCard {
                    key: "{sub.id}",
                    form_name: names.get(&sub.form).cloned(),
                    submission: sub.clone(),
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: usize, to: Route) -> Element {
    rsx! {
        Link { to, class: "stat-card-link",
            Card { class: "stat-card",
                CardHeader {
                    CardDescription { "{label}" }
                    CardTitle { "{value}" }
                }
                CardContent {
                    span { class: "stat-card-more", "View all" }
                }
            }
        }
    }
}
