use crate::response::RawResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::ParseError as UrlParseError;

/// A single entry of the platform error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// The error envelope the API returns instead of (or, rarely, alongside) a
/// resource, e.g. `{"errors":[{"code":32,"message":"Could not authenticate you."}]}`.
///
/// An empty envelope means the API reported no error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.errors.iter().map(|detail| detail.code)
    }

    pub fn has_code(&self, code: i64) -> bool {
        self.codes().any(|c| c == code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, detail) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "twitter: {} {}", detail.code, detail.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Configuration Error: Invalid base URL: {0}")]
    BaseUrlInvalid(#[from] UrlParseError),

    #[error("Configuration Error: Failed to build HTTP client: {0}")]
    HttpClientBuildFailed(reqwest::Error),

    #[error("Request Error: Failed to encode query parameters: {0}")]
    QueryEncodingFailed(#[from] serde_urlencoded::ser::Error),

    #[error("Request Error: Failed to build the request: {0}")]
    RequestBuildFailed(reqwest::Error),

    #[error("Request Error: Failed to send the request or read the response: {0}")]
    RequestFailed(reqwest::Error),

    #[error("Network Error: Connection or timeout issue: {0}")]
    NetworkIssue(reqwest::Error),

    #[error("API Error: {error}")]
    Api {
        // Non-empty error envelope, whatever the HTTP status
        error: ApiError,
        response: Box<RawResponse>,
    },

    #[error("HTTP Error: Server responded with status {status}: {body}")]
    HttpError {
        // Non-2xx with a body that is not an error envelope
        status: StatusCode,
        body: String,
        url: Option<String>,
    },

    #[error("Response Error: Failed to deserialize response body: {source}. Body snippet: '{body_snippet}'")]
    DeserializationFailed {
        source: serde_json::Error,
        body_snippet: String,
    },
}

impl ApiClientError {
    /// True when the request went out but the exchange failed (DNS, TLS,
    /// connect, timeout, broken body). Requests that could not even be built
    /// are not transport failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::NetworkIssue(_))
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { response, .. } => Some(response.status()),
            Self::HttpError { status, .. } => Some(*status),
            Self::RequestFailed(e) | Self::NetworkIssue(e) => e.status(),
            _ => None,
        }
    }

    /// The response metadata, when a round trip happened and it carried an
    /// error envelope.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Best-effort decode of the response body into `T`.
    ///
    /// Returns `None` when there is no response body to look at. Fields the
    /// body does not carry come back as whatever `T` defaults them to.
    pub fn decode_body<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.raw_response().map(RawResponse::decode)
    }
}
