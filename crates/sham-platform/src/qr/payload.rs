//! The identity payload carried by a personal payment code.

use serde::{Deserialize, Serialize};
use sham_common::{PlatformError, UserProfile};

/// JSON body of a personal code: `{"userAccount": "...", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub user_account: String,
    pub name: String,
}

impl QrPayload {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            user_account: profile.account_id.clone(),
            name: profile.name.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, PlatformError> {
        serde_json::to_string(self).map_err(|e| PlatformError::QrEncodeError(e.to_string()))
    }

    /// URL of a hosted `size`x`size` PNG rendering of this payload.
    pub fn image_url(&self, service_url: &str, size: u32) -> Result<String, PlatformError> {
        let data = urlencoding::encode(&self.to_json()?).into_owned();
        Ok(format!("{service_url}?size={size}x{size}&data={data}"))
    }
}
