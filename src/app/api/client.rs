use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

use super::{ProfileResponse, UpdateProfileInput, UpdateProfileResponse};
use crate::app::error::ApiError;

/// Client for the profile backend.
///
/// One attempt per call, no retry or timeout logic; a failure is surfaced
/// directly and the caller decides what the user sees.
pub struct ProfileApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl ProfileApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http_client: reqwest::Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    #[tracing::instrument(name = "Get profile", skip_all)]
    pub async fn get_profile(&self, token: &SecretString) -> Result<ProfileResponse, ApiError> {
        let res = self
            .http_client
            .get(format!("{}/profile", self.base_url))
            .bearer_auth(token.expose_secret())
            .header("Accept", "application/json")
            .send()
            .await?
            .json::<ProfileResponse>()
            .await
            .context("failed to deserialize profile response as JSON")?;

        tracing::debug!(success = res.success, "Profile response received");

        Ok(res)
    }

    #[tracing::instrument(name = "Update profile", skip_all)]
    pub async fn update_profile(
        &self,
        payload: &UpdateProfileInput,
        token: &SecretString,
    ) -> Result<UpdateProfileResponse, ApiError> {
        let res = self
            .http_client
            .put(format!("{}/profile", self.base_url))
            .bearer_auth(token.expose_secret())
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?
            .json::<UpdateProfileResponse>()
            .await
            .context("failed to deserialize update response as JSON")?;

        tracing::debug!(success = res.success, "Update response received");

        Ok(res)
    }
}
