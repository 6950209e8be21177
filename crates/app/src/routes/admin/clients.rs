use dioxus::prelude::*;
use gateway::api;
use shared_types::{activity_by_form, AppError, FormActivity};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PageHeader, PageSubtitle, PageTitle, SkeletonRows,
};

use crate::format_helpers::format_datetime_human;
use crate::use_api;

/// Client activity per form. Accounts themselves are managed by the backend.
#[component]
pub fn ClientsPage() -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            let forms = api::list_forms(&api).await?;
            let submissions = api::list_submissions(&api).await?;
            Ok::<_, AppError>(activity_by_form(&forms, &submissions))
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Clients" }
                PageSubtitle { "Client accounts are managed by the backend. Submission activity per form is shown below." }
            }

            match &*data.read() {
                Some(Ok(activity)) => rsx! {
                    ActivityTable { activity: activity.clone() }
                },
                Some(Err(e)) => {
                    let message = e.friendly_message("Could not load client activity");
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
fn ActivityTable(activity: Vec<FormActivity>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Form" }
                DataTableColumn { "Submissions" }
                DataTableColumn { "Last submitted" }
            }
            DataTableBody {
                if activity.is_empty() {
                    DataTableEmpty { colspan: 3, message: "No forms or submissions yet." }
                }
                for row in activity {
                    ActivityRow { key: "{row.form_id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn ActivityRow(row: FormActivity) -> Element {
    let last = row
        .last_submitted
        .as_deref()
        .map(format_datetime_human)
        .unwrap_or_else(|| "Never".to_string());

    rsx! {
        DataTableRow {
            DataTableCell { "{row.name}" }
            DataTableCell { "{row.submissions}" }
            DataTableCell { "{last}" }
        }
    }
}
