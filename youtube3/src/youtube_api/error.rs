//! Error types returned by every YouTube API call.

use http::{HeaderMap, StatusCode};
use serde::Deserialize;
use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while issuing a call.
///
/// Errors are never retried or recovered from inside the crate: the caller
/// sees exactly what the transport or the server reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required path or query parameter was missing or empty.
    ///
    /// This is detected before any network activity takes place.
    #[error("{method}: missing required parameter `{parameter}`")]
    MissingParameter {
        method: &'static str,
        parameter: &'static str,
    },
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for header `{name}`")]
    InvalidHeader { name: String },
    /// Network, DNS, or TLS failure, or a body that could not be read.
    #[error("HTTP transport error")]
    Transport(#[from] reqwest::Error),
    /// The server answered a conditional request with `304 Not Modified`.
    #[error("resource not modified")]
    NotModified { headers: HeaderMap },
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{method}: failed to decode response body")]
    Decode {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),
    /// The OAuth access token could not be refreshed.
    #[error("authorization failed")]
    Auth(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("media upload failed: {0}")]
    Upload(String),
    #[error("failed to read upload media")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was caused by an HTTP `304 Not Modified` response.
    pub fn is_not_modified(&self) -> bool {
        matches!(self, Self::NotModified { .. })
    }

    /// The HTTP status reported by the server, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotModified { .. } => Some(StatusCode::NOT_MODIFIED),
            Self::Api(e) => Some(e.code),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub(crate) fn auth(report: eyre::Report) -> Self {
        Self::Auth(report.into())
    }
}

/// A non-2xx response from the YouTube API.
///
/// Google APIs describe failures with a JSON envelope of the form
/// `{"error": {"code": 403, "message": "...", "errors": [{"reason": "..."}]}}`.
/// When the body follows that shape its contents are parsed into `message`
/// and `errors`; the raw body is always kept.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub code: StatusCode,
    /// The server-provided description of the failure.
    pub message: String,
    /// Individual error items, in the order the server listed them.
    pub errors: Vec<ErrorItem>,
    /// The response headers.
    pub headers: HeaderMap,
    /// The raw response body.
    pub body: String,
}

/// A single entry of the `errors` array of a Google error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "locationType")]
    pub location_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

impl ApiError {
    pub(crate) fn from_parts(code: StatusCode, headers: HeaderMap, body: String) -> Self {
        let (message, errors) = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => (envelope.error.message, envelope.error.errors),
            Err(_) => (String::new(), Vec::new()),
        };
        Self {
            code,
            message,
            errors,
            headers,
            body,
        }
    }

    /// The `reason` of every error item.
    pub fn reasons(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.reason.as_str())
    }

    /// Whether the request was refused because the project ran out of quota.
    pub fn is_quota_exceeded(&self) -> bool {
        self.reasons()
            .any(|r| matches!(r, "quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YouTube API error {}", self.code.as_u16())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        } else if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        for item in &self.errors {
            write!(f, "\n  {}: {}", item.reason, item.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_google_error_envelope() {
        let body = r#"
        {
          "error": {
            "errors": [
              {
                "domain": "youtube.quota",
                "reason": "quotaExceeded",
                "message": "The request cannot be completed because you have exceeded your quota."
              }
            ],
            "code": 403,
            "message": "The request cannot be completed because you have exceeded your quota."
          }
        }"#;

        let err = ApiError::from_parts(StatusCode::FORBIDDEN, HeaderMap::new(), body.to_string());
        assert_eq!(err.code, StatusCode::FORBIDDEN);
        assert_eq!(
            err.message,
            "The request cannot be completed because you have exceeded your quota."
        );
        assert_eq!(err.reasons().collect::<Vec<_>>(), vec!["quotaExceeded"]);
        assert_eq!(err.errors[0].domain, "youtube.quota");
        assert!(err.is_quota_exceeded());
    }

    #[test]
    fn keeps_non_json_body() {
        let err = ApiError::from_parts(
            StatusCode::BAD_GATEWAY,
            HeaderMap::new(),
            "<html>bad gateway</html>".to_string(),
        );
        assert!(err.message.is_empty());
        assert!(err.errors.is_empty());
        assert!(!err.is_quota_exceeded());
        assert_eq!(err.to_string(), "YouTube API error 502: <html>bad gateway</html>");
    }

    #[test]
    fn display_lists_reasons() {
        let body = r#"{"error":{"code":404,"message":"Video not found.","errors":[{"reason":"videoNotFound","message":"Video not found."}]}}"#;
        let err = ApiError::from_parts(StatusCode::NOT_FOUND, HeaderMap::new(), body.to_string());
        assert_eq!(
            err.to_string(),
            "YouTube API error 404: Video not found.\n  videoNotFound: Video not found."
        );
    }

    #[test]
    fn not_modified_helpers() {
        let err = Error::NotModified {
            headers: HeaderMap::new(),
        };
        assert!(err.is_not_modified());
        assert_eq!(err.status(), Some(StatusCode::NOT_MODIFIED));

        let err = Error::MissingParameter {
            method: "youtube.captions.download",
            parameter: "id",
        };
        assert!(!err.is_not_modified());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "youtube.captions.download: missing required parameter `id`"
        );
    }
}
