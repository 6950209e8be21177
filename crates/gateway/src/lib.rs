//! HTTP access to the onboarding backend.
//!
//! One [`ApiClient`] is built at startup from the resolved [`ApiConfig`]
//! and shared by every page; [`api`] holds one function per endpoint.

pub mod api;
pub mod client;
pub mod config;

pub use client::ApiClient;
pub use shared_types::{ApiConfig, AppError, AppErrorKind};
