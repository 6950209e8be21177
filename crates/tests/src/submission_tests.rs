use gateway::api;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{
    Answers, AppErrorKind, Field, FieldType, FileSelections, FormSchema, SelectedFile,
    SubmissionPayload,
};

use crate::common;

fn grant_schema() -> FormSchema {
    FormSchema::new(
        "Grant",
        "",
        vec![
            common::text_field("business_name"),
            Field {
                name: "employees".into(),
                label: "Employees".into(),
                field_type: FieldType::Number,
                required: false,
                choices: None,
            },
            common::file_field("id_document"),
            common::file_field("bank_statement"),
        ],
    )
}

fn filled_payload(form_id: i64, schema: &FormSchema) -> SubmissionPayload {
    let mut answers = Answers::new();
    answers.set(&schema.fields[0], "Acme Ltd");
    answers.set(&schema.fields[1], "12");
    let mut files = FileSelections::new();
    files.set(
        "bank_statement",
        vec![
            SelectedFile::new("jan.pdf", None, b"%PDF-jan".to_vec()),
            SelectedFile::new("feb.pdf", None, b"%PDF-feb".to_vec()),
        ],
    );
    files.set(
        "id_document",
        vec![SelectedFile::new("passport.png", Some("image/png".into()), vec![0x89, 0x50])],
    );
    SubmissionPayload::build(form_id, schema, &answers, &files)
}

#[tokio::test]
async fn test_submit_sends_multipart_parts() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::CLIENT_EMAIL).await;
    let schema = grant_schema();

    api::submit_form(&client, &filled_payload(7, &schema))
        .await
        .unwrap();

    let backend = server.state.lock().await;
    let parts = &backend.last_upload;
    let form = parts.iter().find(|p| p.name == "form").unwrap();
    assert_eq!(form.text(), "7");

    let data: Value = serde_json::from_str(&parts.iter().find(|p| p.name == "data").unwrap().text())
        .unwrap();
    assert_eq!(
        data,
        json!({
            "business_name": "Acme Ltd",
            "employees": "12",
            "id_document": ["passport.png"],
            "bank_statement": ["jan.pdf", "feb.pdf"],
        })
    );

    let uploaded: Vec<(Option<&str>, Option<&str>)> = parts
        .iter()
        .filter(|p| p.name == "files")
        .map(|p| (p.file_name.as_deref(), p.content_type.as_deref()))
        .collect();
    assert_eq!(
        uploaded,
        vec![
            (Some("passport.png"), Some("image/png")),
            (Some("jan.pdf"), Some("application/pdf")),
            (Some("feb.pdf"), Some("application/pdf")),
        ]
    );
    let jan = parts.iter().find(|p| p.file_name.as_deref() == Some("jan.pdf")).unwrap();
    assert_eq!(jan.bytes, b"%PDF-jan".to_vec());
}

#[tokio::test]
async fn test_submission_is_listed_with_answers_in_order() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::CLIENT_EMAIL).await;
    let schema = grant_schema();
    api::submit_form(&client, &filled_payload(3, &schema))
        .await
        .unwrap();

    let submissions = api::list_submissions(&client).await.unwrap();
    assert_eq!(submissions.len(), 1);
    let sub = &submissions[0];
    assert_eq!(sub.form, 3);
    assert_eq!(sub.title(), "Acme Ltd");

    let keys: Vec<String> = sub.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["business_name", "employees", "id_document", "bank_statement"]
    );
    let names: Vec<String> = sub.files.iter().map(|f| f.display_name()).collect();
    assert_eq!(names, vec!["passport.png", "jan.pdf", "feb.pdf"]);
}

#[tokio::test]
async fn test_submit_without_session_is_unauthorized() {
    let server = common::spawn_backend().await;
    let client = server.client();
    let schema = grant_schema();

    let err = api::submit_form(&client, &filled_payload(1, &schema))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Authentication credentials were not provided.");
    assert!(server.state.lock().await.submissions.is_empty());
}
