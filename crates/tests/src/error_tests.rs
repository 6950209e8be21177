use gateway::api;
use pretty_assertions::assert_eq;
use shared_types::{ApiConfig, AppErrorKind};

use crate::common;

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind and drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = gateway::ApiClient::new(ApiConfig::with_base_url(format!("http://{addr}"))).unwrap();
    let err = api::list_forms(&client).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_unauthorized_listing_carries_backend_detail() {
    let server = common::spawn_backend().await;
    let err = api::list_submissions(&server.client()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(
        err.friendly_message("Could not load submissions"),
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn test_wrong_base_path_is_not_found() {
    let server = common::spawn_backend().await;
    let config = ApiConfig::with_base_url(format!("http://{}/wrong-prefix", server.addr));
    let client = gateway::ApiClient::new(config).unwrap();

    let err = api::list_forms(&client).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message("Could not load forms"), "Could not load forms");
}
