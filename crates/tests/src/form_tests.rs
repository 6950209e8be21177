use axum::http::StatusCode;
use gateway::api;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, FormSchema};

use crate::common;

#[tokio::test]
async fn test_create_form_returns_stored_form() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::ADMIN_EMAIL).await;
    let schema = common::sample_schema("Small business grant");

    let created = api::create_form(&client, &schema).await.unwrap();
    assert!(created.id.is_some());
    assert_eq!(created.name, schema.name);
    assert_eq!(created.fields, schema.fields);
}

#[tokio::test]
async fn test_created_form_is_listed_and_fetchable() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::ADMIN_EMAIL).await;
    let created = api::create_form(&client, &common::sample_schema("KYC"))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let listed = api::list_forms(&client).await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let fetched = api::get_form(&client, id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_get_missing_form_is_none() {
    let server = common::spawn_backend().await;
    let client = server.client();
    assert_eq!(api::get_form(&client, 404).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_then_list_excludes_form() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::ADMIN_EMAIL).await;
    let keep = api::create_form(&client, &common::sample_schema("Keep"))
        .await
        .unwrap();
    let gone = api::create_form(&client, &common::sample_schema("Gone"))
        .await
        .unwrap();

    api::delete_form(&client, gone.id.unwrap()).await.unwrap();

    let names: Vec<String> = api::list_forms(&client)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec![keep.name]);
    assert_eq!(api::get_form(&client, gone.id.unwrap()).await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_unknown_form_is_not_found() {
    let server = common::spawn_backend().await;
    let client = server.client();
    let err = api::delete_form(&client, 999).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.message, "Not found.");
}

#[tokio::test]
async fn test_create_requires_created_status() {
    let server = common::spawn_backend().await;
    server.state.lock().await.create_status = StatusCode::OK;
    let client = server.client();

    let err = api::create_form(&client, &common::sample_schema("Grant"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn test_create_reports_field_errors() {
    let server = common::spawn_backend().await;
    let client = server.client();
    let blank = FormSchema::new("  ", "", vec![common::text_field("owner")]);

    let err = api::create_form(&client, &blank).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Validation failed");
    assert_eq!(
        err.field_errors.get("name").map(String::as_str),
        Some("This field may not be blank.")
    );
    assert!(server.state.lock().await.forms.is_empty());
}
