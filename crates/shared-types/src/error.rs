use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Message shown when the backend gives us nothing better.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message of an error built from a per-field validation body.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// Keys under which the backend reports errors not tied to one field.
const NON_FIELD_KEYS: [&str; 2] = ["non_field_errors", "__all__"];

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    /// The request never produced an HTTP response.
    Network,
    /// Text typed by the user could not be parsed (e.g. the JSON preview).
    MalformedInput,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::MalformedInput => write!(f, "MalformedInput"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

impl AppErrorKind {
    /// Map an HTTP status code onto an error kind.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            _ => AppErrorKind::InternalError,
        }
    }
}

/// Structured application error shared by the gateway client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::MalformedInput, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::InternalError, message)
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// The backend reports failures as `{"detail": "..."}`; validation failures
    /// come back as `{"field": ["message", ...]}`, with errors about the
    /// request as a whole under `non_field_errors`. Anything else collapses to
    /// [`GENERIC_ERROR_MESSAGE`].
    pub fn from_response(status: u16, body: &str) -> Self {
        let kind = AppErrorKind::from_status(status);
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body)
        else {
            return Self::new(kind, GENERIC_ERROR_MESSAGE);
        };

        if let Some(detail) = map.get("detail").and_then(|d| d.as_str()) {
            return Self::new(kind, detail);
        }

        let mut field_errors = HashMap::new();
        for (field, value) in &map {
            let first = match value {
                serde_json::Value::String(msg) => Some(msg.clone()),
                serde_json::Value::Array(msgs) => msgs
                    .iter()
                    .find_map(|m| m.as_str())
                    .map(str::to_string),
                _ => None,
            };
            if let Some(msg) = first {
                field_errors.insert(field.clone(), msg);
            }
        }

        if field_errors.is_empty() {
            return Self::new(kind, GENERIC_ERROR_MESSAGE);
        }

        let non_field = NON_FIELD_KEYS
            .iter()
            .find_map(|key| field_errors.remove(*key));
        match non_field {
            Some(message) => Self {
                kind,
                message,
                field_errors,
            },
            None => Self {
                kind,
                message: VALIDATION_FAILED_MESSAGE.to_string(),
                field_errors,
            },
        }
    }

    /// Message suitable for a toast: the backend's own message when there was
    /// one, otherwise the supplied fallback.
    pub fn friendly_message(&self, fallback: &str) -> String {
        if self.message.is_empty()
            || self.message == GENERIC_ERROR_MESSAGE
            || self.message == VALIDATION_FAILED_MESSAGE
        {
            fallback.to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
