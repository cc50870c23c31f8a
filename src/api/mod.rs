//! # Content API
//!
//! HTTP clients for the portfolio backend.
//!
//! - [`client`]: read side. Fetches episodes and projects and folds them
//!   into a [`Catalog`](crate::content::Catalog), falling back to built-in data.
//! - [`admin`]: write side. Token-authenticated CRUD for episodes, projects
//!   and images.
//! - [`types`]: wire records and their mapping onto content types.

pub mod admin;
pub mod client;
pub mod types;

use std::fmt;

use log::warn;

pub use admin::AdminClient;
pub use client::{CatalogLoad, ContentClient, ContentSource, load_catalog};

/// Header carrying the shared admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Errors from talking to the content API.
#[derive(Debug)]
pub enum ApiError {
    /// Client misconfigured (missing admin token, bad base URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The server answered with a non-2xx status.
    Api { status: u16, message: String },
    /// The response body was not what we expected.
    Parse(String),
    /// A request was rejected before sending (missing required field).
    Validation(String),
    /// Local file access failed (image upload).
    Io(std::io::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
            ApiError::Validation(msg) => write!(f, "validation error: {msg}"),
            ApiError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Parse(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(e)
    }
}

/// Passes 2xx responses through; turns anything else into [`ApiError::Api`].
///
/// The message is the body's `error` field, with `details` appended when
/// present. Bodies that are not JSON are used verbatim.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let status = status.as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    let message = error_message(&body);
    warn!("Content API error: {} - {}", status, message);
    Err(ApiError::Api { status, message })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<types::ErrorBody>(body) {
        Ok(types::ErrorBody {
            error,
            details: Some(details),
        }) => format!("{error}: {details}"),
        Ok(types::ErrorBody { error, details: None }) => error,
        Err(_) if body.trim().is_empty() => "unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Joins a base URL and an absolute path without doubling slashes.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
