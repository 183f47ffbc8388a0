//! Response decoding and error classification.
//!
//! The API answers with JSON in every case, shaped either as the requested
//! resource or as an error envelope, and the envelope can arrive with a 2xx
//! status. The transport only judges status codes, so the two signals are
//! collapsed here into a single `Result`.

use crate::errors::{ApiClientError, ApiError};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

const BODY_SNIPPET_LEN: usize = 256;

/// Transport-level view of a completed round trip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            headers,
            url,
            body: body.into(),
        }
    }

    /// Drains a `reqwest` response into an owned `RawResponse`.
    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.text().await?;
        Ok(RawResponse::new(status, headers, url, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    fn body_snippet(&self) -> String {
        self.body.chars().take(BODY_SNIPPET_LEN).collect()
    }
}

/// A decoded resource together with the response it came from.
#[derive(Debug, Clone)]
pub struct Received<T> {
    pub value: T,
    pub raw: RawResponse,
}

impl<T> Received<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, RawResponse) {
        (self.value, self.raw)
    }
}

/// Decodes the error envelope. Bodies of any other shape, including
/// non-JSON ones, give the empty envelope.
pub fn decode_error_envelope(raw: &RawResponse) -> ApiError {
    raw.decode::<ApiError>().unwrap_or_default()
}

/// Turns a non-empty error envelope into an error. The response passes
/// through untouched when the envelope is empty.
pub fn relevant_error(raw: RawResponse) -> Result<RawResponse, ApiClientError> {
    let error = decode_error_envelope(&raw);
    if error.is_empty() {
        return Ok(raw);
    }

    warn!(
        status = %raw.status(),
        url = %raw.url(),
        codes = ?error.codes().collect::<Vec<_>>(),
        "API returned an error envelope"
    );
    Err(ApiClientError::Api {
        error,
        response: Box::new(raw),
    })
}

/// Classifies one round trip.
///
/// A transport error is returned unchanged, before any payload is looked at.
/// Then, in order: a non-empty error envelope, a non-2xx status, and a body
/// that does not decode as `T` are each reported as errors.
pub fn unify<T: DeserializeOwned>(
    sent: Result<RawResponse, ApiClientError>,
) -> Result<Received<T>, ApiClientError> {
    let raw = relevant_error(sent?)?;

    if !raw.status().is_success() {
        warn!(status = %raw.status(), url = %raw.url(), "unexpected HTTP status");
        return Err(ApiClientError::HttpError {
            status: raw.status(),
            body: raw.body_snippet(),
            url: Some(raw.url().to_string()),
        });
    }

    match raw.decode::<T>() {
        Ok(value) => Ok(Received { value, raw }),
        Err(source) => Err(ApiClientError::DeserializationFailed {
            source,
            body_snippet: raw.body_snippet(),
        }),
    }
}
