use serde::{Deserialize, Serialize};

/// An account as returned by the `account/*` endpoints.
///
/// Every field falls back to its default when the payload leaves it out, so
/// decoding never fails on a sparse or partial body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    pub location: String,
    pub description: String,
    pub url: Option<String>,
    /// Only present when requested with `include_email` and the app is
    /// allowed to read it.
    pub email: Option<String>,
    pub protected: bool,
    pub verified: bool,
    pub followers_count: u64,
    pub friends_count: u64,
    pub listed_count: u64,
    pub favourites_count: u64,
    pub statuses_count: u64,
    pub created_at: String,
    pub lang: Option<String>,
    pub profile_image_url_https: String,
    pub profile_banner_url: Option<String>,
    pub default_profile: bool,
    pub default_profile_image: bool,
    pub entities: Option<serde_json::Value>,
    /// Most recent tweet, omitted when `skip_status` is set.
    pub status: Option<serde_json::Value>,
}
