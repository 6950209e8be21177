use dioxus::prelude::*;
use shared_types::{Submission, SubmissionFile};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, DetailItem, DetailList};

use crate::format_helpers::format_datetime_human;

/// A submission's answers and attachments.
///
/// `form_name` labels the card when the caller knows which form it answers.
#[component]
pub fn SubmissionCard(submission: Submission, #[props(default)] form_name: Option<String>) -> Element {
    let title = submission.title();
    let submitted = format_datetime_human(&submission.created_at);
    let subtitle = match form_name {
        Some(name) => format!("{name} · Submitted {submitted}"),
        None => format!("Submitted {submitted}"),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./submission_card.css") }
        Card { class: "submission-card",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{subtitle}" }
            }
            CardContent {
                DetailList {
                    SubmissionEntries { entries: submission.entries() }
                }
                SubmissionFiles { files: submission.files.clone() }
            }
        }
    }
}

#[component]
pub fn SubmissionEntries(entries: Vec<(String, String)>) -> Element {
    rsx! {
        for (key, value) in entries {
            DetailItem { key: "{key}", label: key.clone(), value }
        }
    }
}

/// Attachment links, labelled by the stored file's name.
#[component]
pub fn SubmissionFiles(files: Vec<SubmissionFile>) -> Element {
    if files.is_empty() {
        return rsx! {};
    }
    let links: Vec<(i64, String, String)> = files
        .iter()
        .map(|f| (f.id, f.file.clone(), f.display_name()))
        .collect();

    rsx! {
        div { class: "submission-files",
            h4 { class: "submission-files-title", "Files" }
            ul {
                for (id, url, name) in links {
                    li { key: "{id}",
                        a {
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_render_in_order() {
        let entries = vec![
            ("business_name".to_string(), "Acme Ltd".to_string()),
            ("employees".to_string(), "12".to_string()),
        ];
        let html = dioxus_ssr::render_element(rsx! {
            SubmissionEntries { entries }
        });
        let first = html.find("business_name").unwrap();
        let second = html.find("employees").unwrap();
        assert!(first < second);
        assert!(html.contains("Acme Ltd"));
    }

    #[test]
    fn files_link_to_their_url() {
        let files = vec![SubmissionFile {
            id: 3,
            file: "https://cdn.example.com/media/uploads/passport.pdf".into(),
        }];
        let html = dioxus_ssr::render_element(rsx! {
            SubmissionFiles { files }
        });
        assert!(html.contains("href=\"https://cdn.example.com/media/uploads/passport.pdf\""));
        assert!(html.contains(">passport.pdf</a>"));
    }

    #[test]
    fn no_files_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! {
            SubmissionFiles { files: vec![] }
        });
        assert!(!html.contains("submission-files"));
    }
}
