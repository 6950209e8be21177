//! Toast helpers that also leave a trace in the log.

use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

pub fn success(toasts: &Toasts, message: impl Into<String>) {
    let message = message.into();
    tracing::info!(%message, "success");
    toasts.success(message, ToastOptions::new());
}

/// Report a failed operation, preferring the backend's own message.
pub fn failure(toasts: &Toasts, error: &AppError, fallback: &str) {
    tracing::warn!(%error, "operation failed");
    toasts.error(error.friendly_message(fallback), ToastOptions::new());
}

/// Report a problem caught before anything was sent.
pub fn invalid(toasts: &Toasts, message: impl Into<String>) {
    toasts.error(message.into(), ToastOptions::new());
}
