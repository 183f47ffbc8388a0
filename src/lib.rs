//! Typed client for the Twitter REST API v1.1 `account/` endpoints.
//!
//! ```no_run
//! # async fn run() -> Result<(), tw_api_client::ApiClientError> {
//! use tw_api_client::{AccountVerifyParams, ClientConfig, TwitterClient};
//!
//! // The transport is expected to authorize requests, e.g. through default headers.
//! let http = reqwest::Client::builder().build().map_err(tw_api_client::ApiClientError::HttpClientBuildFailed)?;
//! let client = TwitterClient::with_http_client(&ClientConfig::builder().build()?, http)?;
//!
//! let params = AccountVerifyParams { skip_status: Some(true), ..Default::default() };
//! let user = client.accounts().verify_credentials(Some(&params)).await?.into_value();
//! println!("@{}", user.screen_name);
//! # Ok(())
//! # }
//! ```

// Declare modules within this crate
pub mod account;
pub mod client;
pub mod config;
pub mod errors;
pub mod response;
pub mod user;

// Re-export the main components for users of this crate
pub use account::{
    AccountService, AccountUpdateProfileBannerParams, AccountUpdateProfileImageParams,
    AccountUpdateProfileParams, AccountVerifyParams,
};
pub use client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use errors::{ApiClientError, ApiError, ErrorDetail};
pub use response::{RawResponse, Received};
pub use user::User;

/// Entry point holding one service per resource group, all sharing a single
/// transport and configuration.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    accounts: AccountService,
}

impl TwitterClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiClientError> {
        Self::from_api_client(&ApiClient::new(config)?)
    }

    pub fn with_http_client(
        config: &ClientConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, ApiClientError> {
        Self::from_api_client(&ApiClient::with_http_client(config, http_client))
    }

    fn from_api_client(client: &ApiClient) -> Result<Self, ApiClientError> {
        Ok(TwitterClient {
            accounts: AccountService::new(client)?,
        })
    }

    pub fn accounts(&self) -> &AccountService {
        &self.accounts
    }
}
