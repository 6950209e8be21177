use gateway::api;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Destination, LoginRequest, UserRole};

use crate::common;

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_then_current_user() {
    let server = common::spawn_backend().await;
    let client = server.client();

    api::login(&client, &credentials(common::ADMIN_EMAIL, common::PASSWORD))
        .await
        .unwrap();
    let user = api::current_user(&client).await.unwrap();

    assert_eq!(user.email, common::ADMIN_EMAIL);
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(user.role.home(), Destination::AdminHome);
}

#[tokio::test]
async fn test_client_role_lands_on_client_home() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::CLIENT_EMAIL).await;
    let user = api::current_user(&client).await.unwrap();
    assert_eq!(user.role, UserRole::Client);
    assert_eq!(user.role.home().path(), "/");
}

#[tokio::test]
async fn test_wrong_password_reports_backend_message() {
    let server = common::spawn_backend().await;
    let client = server.client();

    let err = api::login(&client, &credentials(common::ADMIN_EMAIL, "guess"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Unable to log in with provided credentials.");
    assert_eq!(
        err.friendly_message("Invalid credentials"),
        "Unable to log in with provided credentials."
    );
}

#[tokio::test]
async fn test_logout_ends_session() {
    let server = common::spawn_backend().await;
    let client = common::signed_in(&server, common::ADMIN_EMAIL).await;

    api::logout(&client).await.unwrap();

    let err = api::current_user(&client).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let server = common::spawn_backend().await;
    let _admin = common::signed_in(&server, common::ADMIN_EMAIL).await;
    let anonymous = server.client();

    let err = api::current_user(&anonymous).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}
