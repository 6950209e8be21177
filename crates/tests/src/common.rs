//! In-process stand-in for the REST backend, served over a real socket so
//! requests go through the gateway's HTTP client and cookie jar.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use gateway::ApiClient;
use serde_json::{json, Value};
use shared_types::{ApiConfig, Field, FieldType, FormSchema, LoginRequest};
use tokio::sync::Mutex;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const CLIENT_EMAIL: &str = "client@example.com";
pub const PASSWORD: &str = "correct horse battery staple";
const SESSION_COOKIE: &str = "sessionid";

/// A multipart part as the backend received it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ReceivedPart {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

pub struct Backend {
    pub forms: Vec<Value>,
    pub submissions: Vec<Value>,
    /// Parts of the most recent `api/forms/submit/` request.
    pub last_upload: Vec<ReceivedPart>,
    /// Status answered by `api/forms/create/` on success.
    pub create_status: StatusCode,
    sessions: HashSet<(String, String)>,
    next_id: i64,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            forms: Vec::new(),
            submissions: Vec::new(),
            last_upload: Vec::new(),
            create_status: StatusCode::CREATED,
            sessions: HashSet::new(),
            next_id: 1,
        }
    }
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

pub type Shared = Arc<Mutex<Backend>>;

pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl TestServer {
    /// A fresh gateway client with its own cookie jar.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig::with_base_url(format!("http://{}", self.addr)))
            .expect("mock backend URL is valid")
    }
}

/// Start an empty backend on an ephemeral port.
pub async fn spawn_backend() -> TestServer {
    let state = Shared::default();
    let router = Router::new()
        .route("/api/forms/", get(list_forms))
        .route("/api/forms/create/", post(create_form))
        .route("/api/forms/submit/", post(submit_form))
        .route("/api/forms/{id}/", get(get_form))
        .route("/api/forms/{id}/delete/", delete(delete_form))
        .route("/api/submissions/", get(list_submissions))
        .route("/api/auth/login/", post(login))
        .route("/api/auth/logout/", post(logout))
        .route("/api/user/", get(current_user))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock backend crashed");
    });

    TestServer { addr, state }
}

/// A gateway client already signed in as `email`.
pub async fn signed_in(server: &TestServer, email: &str) -> ApiClient {
    let client = server.client();
    gateway::api::login(
        &client,
        &LoginRequest {
            email: email.to_string(),
            password: PASSWORD.to_string(),
        },
    )
    .await
    .expect("login against mock backend");
    client
}

pub fn text_field(name: &str) -> Field {
    Field {
        name: name.into(),
        label: name.replace('_', " "),
        field_type: FieldType::Text,
        required: true,
        choices: None,
    }
}

pub fn file_field(name: &str) -> Field {
    Field {
        name: name.into(),
        label: name.replace('_', " "),
        field_type: FieldType::File,
        required: false,
        choices: None,
    }
}

pub fn sample_schema(name: &str) -> FormSchema {
    FormSchema::new(
        name,
        "Tell us about your business",
        vec![text_field("business_name"), file_field("id_document")],
    )
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn session_of(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

async fn signed_in_email(state: &Shared, headers: &HeaderMap) -> Option<String> {
    let token = session_of(headers)?;
    let backend = state.lock().await;
    backend
        .sessions
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, email)| email.clone())
}

async fn list_forms(State(state): State<Shared>) -> Json<Value> {
    Json(Value::Array(state.lock().await.forms.clone()))
}

async fn get_form(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let backend = state.lock().await;
    match backend.forms.iter().find(|f| f["id"] == id) {
        Some(form) => Json(form.clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Not found."),
    }
}

async fn create_form(State(state): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default().trim().to_string();
    if name.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "name": ["This field may not be blank."] })),
        )
            .into_response();
    }
    let mut backend = state.lock().await;
    let id = backend.next_id();
    body["id"] = json!(id);
    backend.forms.push(body.clone());
    (backend.create_status, Json(body)).into_response()
}

async fn delete_form(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut backend = state.lock().await;
    let before = backend.forms.len();
    backend.forms.retain(|f| f["id"] != id);
    if backend.forms.len() == before {
        detail(StatusCode::NOT_FOUND, "Not found.")
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn submit_form(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if signed_in_email(&state, &headers).await.is_none() {
        return detail(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        );
    }

    let mut parts = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        parts.push(ReceivedPart {
            name,
            file_name,
            content_type,
            bytes,
        });
    }

    let text_part = |name: &str| parts.iter().find(|p| p.name == name).map(ReceivedPart::text);
    let Some(form_id) = text_part("form").and_then(|f| f.parse::<i64>().ok()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "form": ["A valid integer is required."] })))
            .into_response();
    };
    let data = text_part("data")
        .and_then(|d| serde_json::from_str::<Value>(&d).ok())
        .unwrap_or_else(|| json!({}));

    let mut backend = state.lock().await;
    let mut files = Vec::new();
    for part in parts.iter().filter(|p| p.name == "files") {
        let file_id = backend.next_id();
        let file_name = part.file_name.clone().unwrap_or_default();
        files.push(json!({ "id": file_id, "file": format!("/media/uploads/{file_name}") }));
    }
    let id = backend.next_id();
    let record = json!({
        "id": id,
        "form": form_id,
        "data": data,
        "files": files,
        "created_at": format!("2026-01-20T21:{:02}:00Z", id % 60),
    });
    backend.submissions.push(record.clone());
    backend.last_upload = parts;
    (StatusCode::CREATED, Json(record)).into_response()
}

async fn list_submissions(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if signed_in_email(&state, &headers).await.is_none() {
        return detail(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        );
    }
    Json(Value::Array(state.lock().await.submissions.clone())).into_response()
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginRequest>) -> Response {
    let known = body.email == ADMIN_EMAIL || body.email == CLIENT_EMAIL;
    if !known || body.password != PASSWORD {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "non_field_errors": ["Unable to log in with provided credentials."] })),
        )
            .into_response();
    }
    let token = uuid::Uuid::new_v4().to_string();
    state
        .lock()
        .await
        .sessions
        .insert((token.clone(), body.email.clone()));
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly"),
        )],
        Json(json!({ "detail": "Logged in" })),
    )
        .into_response()
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some(token) = session_of(&headers) {
        state.lock().await.sessions.retain(|(t, _)| *t != token);
    }
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"),
        )],
        Json(json!({ "detail": "Logged out" })),
    )
        .into_response()
}

async fn current_user(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let Some(email) = signed_in_email(&state, &headers).await else {
        return detail(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        );
    };
    let (id, role) = if email == ADMIN_EMAIL {
        (1, "admin")
    } else {
        (2, "client")
    };
    let username = email.split('@').next().unwrap_or_default().to_string();
    Json(json!({
        "id": id,
        "username": username,
        "email": email,
        "first_name": "",
        "last_name": "",
        "phone_number": null,
        "role": role,
    }))
    .into_response()
}
