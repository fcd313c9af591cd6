use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::types::{
    Activity, ApiResponse, ConnectedUser, Deal, NewActivity, NewDeal, NewOrganization, NewPerson,
    Organization, Person,
};

pub const DEFAULT_BASE_URL: &str = "https://api.pipedrive.com/v1";

/// The capability set the seeder needs from the CRM. Kept as a trait so the
/// orchestrator can run against a mock in tests.
#[async_trait]
pub trait CrmApi: Send + Sync {
    async fn create_organization(&self, payload: NewOrganization) -> ApiResult<Organization>;
    async fn create_person(&self, payload: NewPerson) -> ApiResult<Person>;
    async fn create_deal(&self, payload: NewDeal) -> ApiResult<Deal>;
    async fn create_activity(&self, payload: NewActivity) -> ApiResult<Activity>;
}

pub struct PipedriveClient {
    http: Client,
    base_url: String,
    api_token: String,
}

impl PipedriveClient {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self::with_base_url(api_token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: api_token.into(),
        }
    }

    /// Confirms the token before a seed run by fetching the token's owner.
    pub async fn verify_auth(&self) -> ApiResult<ConnectedUser> {
        let url = format!("{}/users/me", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("api_token", self.api_token.as_str())])
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn post_resource<P, T>(&self, resource: &str, payload: &P) -> ApiResult<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, resource);
        let response = self
            .http
            .post(&url)
            .query(&[("api_token", self.api_token.as_str())])
            .json(payload)
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::unauthorized(format!(
                "api token rejected (status {})",
                status.as_u16()
            )));
        }

        let text = response.text().await?;
        let body: ApiResponse<T> = serde_json::from_str(&text).map_err(|err| {
            if status.is_success() {
                ApiError::decode(err.to_string())
            } else {
                ApiError::rejected(status.as_u16(), text.chars().take(200).collect::<String>())
            }
        })?;

        if !status.is_success() || !body.success {
            let message = body
                .error
                .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
            return Err(ApiError::rejected(status.as_u16(), message));
        }

        body.data
            .ok_or_else(|| ApiError::decode("envelope reported success without data"))
    }
}

#[async_trait]
impl CrmApi for PipedriveClient {
    async fn create_organization(&self, payload: NewOrganization) -> ApiResult<Organization> {
        tracing::debug!(name = %payload.name, "creating organization");
        self.post_resource("organizations", &payload).await
    }

    async fn create_person(&self, payload: NewPerson) -> ApiResult<Person> {
        tracing::debug!(name = %payload.name, org_id = payload.org_id, "creating person");
        self.post_resource("persons", &payload).await
    }

    async fn create_deal(&self, payload: NewDeal) -> ApiResult<Deal> {
        tracing::debug!(title = %payload.title, value = payload.value, "creating deal");
        self.post_resource("deals", &payload).await
    }

    async fn create_activity(&self, payload: NewActivity) -> ApiResult<Activity> {
        tracing::debug!(subject = %payload.subject, "creating activity");
        self.post_resource("activities", &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = PipedriveClient::with_base_url("token", "https://example.test/v1/");
        assert_eq!(client.base_url, "https://example.test/v1");
    }
}
