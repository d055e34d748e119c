use std::time::Duration;

use crate::config::Credentials;
use crate::error::ClientError;
use crate::models::{Perspective, PerspectiveListResponse};
use crate::{API_BASE_URL, DEFAULT_PAGE_NO, DEFAULT_PAGE_SIZE, REQUEST_TIMEOUT_SECS};

#[derive(Clone)]
pub struct HarnessClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl HarnessClient {
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_base_url(credentials, API_BASE_URL)
    }

    /// Point the client at a different host. Used by tests to target a
    /// mock server.
    pub fn with_base_url(
        credentials: Credentials,
        base_url: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(HarnessClient {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// List the first page of perspectives for the account.
    ///
    /// Decodes the `{ data: { views: [...] } }` envelope and returns the
    /// views. Only the first page (up to 20 entries) is fetched.
    pub async fn get_perspectives(&self) -> Result<Vec<Perspective>, ClientError> {
        let url = format!("{}/ccm/api/perspective/getAllPerspectives", self.base_url);
        let page_size = DEFAULT_PAGE_SIZE.to_string();
        let page_no = DEFAULT_PAGE_NO.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("accountIdentifier", self.credentials.account_id.as_str()),
                ("pageSize", page_size.as_str()),
                ("pageNo", page_no.as_str()),
            ])
            .header("x-api-key", self.credentials.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list: PerspectiveListResponse = serde_json::from_str(&body)?;
        Ok(list.data.views)
    }

    /// Fetch the detail body for one perspective.
    ///
    /// The body is returned verbatim, not parsed.
    pub async fn get_perspective_detail(
        &self,
        perspective_id: &str,
    ) -> Result<String, ClientError> {
        let url = format!("{}/ccm/api/perspective", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("accountIdentifier", self.credentials.account_id.as_str()),
                ("perspectiveId", perspective_id),
            ])
            .header("x-api-key", self.credentials.api_key.as_str())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
