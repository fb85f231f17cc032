//! Error handling for the unibox client.
//!
//! Every HTTP failure is normalized into a [`ClientError`] variant whose
//! `Display` is the best message the service gave us: the JSON `detail` or
//! `message` field when present, otherwise the raw body text, otherwise the
//! HTTP status text.

use reqwest::StatusCode;
use serde_json::Value;

/// Message substituted for 401 bodies that complain about a missing or
/// expired refresh token, so UI callers see actionable wording instead of
/// backend internals.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required. Please log in to continue.";

/// Errors surfaced by [`crate::ApiClient`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// HTTP 401 from the service.
    #[error("{message}")]
    Unauthorized {
        /// Server-provided message.
        message: String,
    },

    /// HTTP 404.
    #[error("{message}")]
    NotFound {
        /// Server-provided message.
        message: String,
    },

    /// HTTP 429, with the `Retry-After` hint when the service sent one.
    #[error("{message}")]
    RateLimited {
        /// Server-provided message.
        message: String,
        /// Raw `Retry-After` header value, if present.
        retry_after: Option<String>,
    },

    /// HTTP 400, 413, 415 or 422.
    #[error("{message}")]
    InvalidRequest {
        /// Server-provided message.
        message: String,
    },

    /// Any other non-2xx status, including 5xx.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided message.
        message: String,
        /// Parsed JSON error body, when the service returned one.
        details: Option<Value>,
    },

    /// Transport-level failure (connection refused, DNS, timeout, body read).
    /// Never retried; the message carries the underlying failure text for UI
    /// callers to interpret.
    #[error("{0}")]
    Http(String),

    /// A body or payload that was not valid JSON.
    #[error("{0}")]
    Json(String),

    /// A response that parsed as JSON but did not match the expected model.
    #[error("{0}")]
    Decode(String),

    /// Client-side configuration problem (bad base URL, header, TLS setup).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The underlying message text, without any variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::RateLimited { message, .. }
            | Self::InvalidRequest { message }
            | Self::Api { message, .. } => message,
            Self::Http(message)
            | Self::Json(message)
            | Self::Decode(message)
            | Self::Config(message) => message,
        }
    }

    /// Whether this is the transient-auth failure the refresh path recovers.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Classify a non-2xx response into a typed error.
///
/// The body has already been read exactly once as text by the caller, so a
/// JSON parse failure here cannot double-consume the stream. Message
/// precedence: JSON `detail`, then JSON `message`, then the raw text, then
/// the HTTP status text.
pub(crate) fn classify_http_error(
    status: StatusCode,
    body: &str,
    retry_after: Option<String>,
) -> ClientError {
    let status_text = status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP error {}", status.as_u16()));

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let mut message = match &parsed {
        Some(json) => json
            .get("detail")
            .or_else(|| json.get("message"))
            .map(|field| match field {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or(status_text),
        None if !body.trim().is_empty() => body.to_owned(),
        None => status_text,
    };

    match status.as_u16() {
        401 => {
            if message.contains("refresh token") {
                message = AUTH_REQUIRED_MESSAGE.to_owned();
            }
            ClientError::Unauthorized { message }
        }
        404 => ClientError::NotFound { message },
        429 => ClientError::RateLimited {
            message,
            retry_after,
        },
        400 | 413 | 415 | 422 => ClientError::InvalidRequest { message },
        code => ClientError::Api {
            status: code,
            message,
            details: parsed,
        },
    }
}
