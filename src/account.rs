//! The `account/` resource group: credential checks and profile updates.
//!
//! Every method performs exactly one request. Parameters are always sent as
//! query parameters, POST endpoints included, and are not validated locally;
//! the API rejects bad combinations itself.

use crate::client::ApiClient;
use crate::errors::ApiClientError;
use crate::response::Received;
use crate::user::User;
use serde::Serialize;
use tracing::instrument;

const RESOURCE: &str = "account/";

/// Parameters for [`AccountService::verify_credentials`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountVerifyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_email: Option<bool>,
}

/// Parameters for [`AccountService::update_profile`]. Unset fields keep their
/// current value on the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountUpdateProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
}

/// Parameters for [`AccountService::update_profile_image`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountUpdateProfileImageParams {
    /// Base64-encoded image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_entities: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_status: Option<bool>,
}

/// Parameters for [`AccountService::update_profile_banner`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountUpdateProfileBannerParams {
    /// Base64-encoded banner image.
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_left: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_top: Option<u32>,
}

/// Client for the `account/` endpoints. Every call needs a user-authorized
/// transport; passing `None` as parameters leaves every option to the API.
#[derive(Debug, Clone)]
pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    pub fn new(client: &ApiClient) -> Result<Self, ApiClientError> {
        Ok(AccountService {
            client: client.path(RESOURCE)?,
        })
    }

    /// Returns the authorized user when the credentials are valid.
    #[instrument(level = "debug", skip_all)]
    pub async fn verify_credentials(
        &self,
        params: Option<&AccountVerifyParams>,
    ) -> Result<Received<User>, ApiClientError> {
        let request = self.client.get("verify_credentials.json", params)?;
        self.client.send(request).await
    }

    /// Updates the profile fields that are set and returns the updated user.
    #[instrument(level = "debug", skip_all)]
    pub async fn update_profile(
        &self,
        params: Option<&AccountUpdateProfileParams>,
    ) -> Result<Received<User>, ApiClientError> {
        let request = self.client.post("update_profile.json", params)?;
        self.client.send(request).await
    }

    /// Replaces the profile image. The API takes this one as a GET.
    #[instrument(level = "debug", skip_all)]
    pub async fn update_profile_image(
        &self,
        params: Option<&AccountUpdateProfileImageParams>,
    ) -> Result<Received<User>, ApiClientError> {
        let request = self.client.get("update_profile_image.json", params)?;
        self.client.send(request).await
    }

    #[instrument(level = "debug", skip_all)]
    pub async fn update_profile_banner(
        &self,
        params: Option<&AccountUpdateProfileBannerParams>,
    ) -> Result<Received<User>, ApiClientError> {
        let request = self.client.post("update_profile_banner.json", params)?;
        self.client.send(request).await
    }
}
