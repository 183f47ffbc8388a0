use crate::config::{with_trailing_slash, ClientConfig};
use crate::errors::ApiClientError;
use crate::response::{unify, RawResponse, Received};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;
use url::Url;

/// Builds and sends requests relative to a base path.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted,
/// so every service scoped off one client shares its connection pool and
/// whatever credentials the transport attaches.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(ApiClientError::HttpClientBuildFailed)?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Uses a caller-built transport, typically one that already signs or
    /// authorizes every request. The configured timeout and user agent are
    /// then the caller's business.
    pub fn with_http_client(config: &ClientConfig, http_client: reqwest::Client) -> Self {
        ApiClient {
            base_url: config.base_url().clone(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a client whose base is extended by `segment`.
    pub fn path(&self, segment: &str) -> Result<Self, ApiClientError> {
        let base_url = self.base_url.join(&with_trailing_slash(segment))?;
        Ok(ApiClient {
            base_url,
            http_client: self.http_client.clone(),
        })
    }

    /// Joins `endpoint` onto the base and encodes `params` as the query string.
    /// Fields a parameter struct skips when serializing never reach the URL.
    pub fn build_url<P>(&self, endpoint: &str, params: Option<&P>) -> Result<Url, ApiClientError>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self.base_url.join(endpoint)?;
        if let Some(params) = params {
            let query = serde_urlencoded::to_string(params)?;
            if !query.is_empty() {
                url.set_query(Some(&query));
            }
        }
        Ok(url)
    }

    pub fn request<P>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&P>,
    ) -> Result<RequestBuilder, ApiClientError>
    where
        P: Serialize + ?Sized,
    {
        let url = self.build_url(endpoint, params)?;
        Ok(self.http_client.request(method, url))
    }

    pub fn get<P>(&self, endpoint: &str, params: Option<&P>) -> Result<RequestBuilder, ApiClientError>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, endpoint, params)
    }

    pub fn post<P>(&self, endpoint: &str, params: Option<&P>) -> Result<RequestBuilder, ApiClientError>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, params)
    }

    /// Sends the request and decodes the body as `T`, or as the API error
    /// envelope when it carries one.
    pub async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Received<T>, ApiClientError> {
        unify(self.execute(builder).await)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, ApiClientError> {
        let request = builder.build().map_err(ApiClientError::RequestBuildFailed)?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "sending request");
        let started = Instant::now();

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(transport_error)?;
        let raw = RawResponse::read(response).await.map_err(transport_error)?;

        debug!(
            %method,
            %url,
            status = %raw.status(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "received response"
        );
        Ok(raw)
    }
}

fn transport_error(err: reqwest::Error) -> ApiClientError {
    // Connect and timeout failures get their own variant so callers can retry them
    if err.is_connect() || err.is_timeout() {
        ApiClientError::NetworkIssue(err)
    } else {
        ApiClientError::RequestFailed(err)
    }
}
