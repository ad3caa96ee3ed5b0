use anyhow::anyhow;
use async_trait::async_trait;
use domain_workslip::{
    exception::{WorkSlipException, WorkSlipResult},
    model::{entity::WorkSlip, vo::Credentials},
    service::WorkSlipService,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::ClientConfig;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Record service reached over HTTP.
///
/// Reads never fail: transport and server errors are logged and yield an
/// empty list or no slip. Writes report the server's error message.
#[derive(typed_builder::TypedBuilder)]
pub struct RemoteWorkSlipService {
    #[builder(default)]
    client: Client,
    base_url: Url,
    /// Sent as HTTP basic auth on updates.
    #[builder(default, setter(strip_option))]
    credentials: Option<Credentials>,
}

impl RemoteWorkSlipService {
    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::builder().base_url(Url::parse(&config.base_url)?).build())
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    fn slips_url(&self, id: Option<&str>) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("Base url {} cannot hold a path.", self.base_url))?;
            segments.pop_if_empty().extend(["api", "slips"]);
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Some(el) => request.basic_auth(&el.username, Some(&el.password)),
            None => request,
        }
    }

    async fn fetch_all(&self) -> anyhow::Result<Vec<WorkSlip>> {
        let response = self.client.get(self.slips_url(None)?).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    async fn fetch_one(&self, id: &str) -> anyhow::Result<Option<WorkSlip>> {
        let response = self.client.get(self.slips_url(Some(id))?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.error_for_status()?.json().await?))
    }

    /// Maps an unsuccessful write response to the matching exception.
    async fn failure(&self, response: Response, slip: Option<&WorkSlip>, id: &str) -> WorkSlipException {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|el| el.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_owned()
            });
        match status {
            StatusCode::CONFLICT => match slip {
                Some(slip) => WorkSlipException::SoNumberConflict {
                    so_number: slip.so_number.clone(),
                },
                None => WorkSlipException::Remote {
                    status: status.as_u16(),
                    message,
                },
            },
            StatusCode::NOT_FOUND => WorkSlipException::NotFound { id: id.to_owned() },
            StatusCode::UNAUTHORIZED => WorkSlipException::Unauthorized,
            StatusCode::FORBIDDEN => WorkSlipException::Forbidden {
                username: self
                    .credentials
                    .as_ref()
                    .map(|el| el.username.clone())
                    .unwrap_or_default(),
            },
            StatusCode::BAD_REQUEST => WorkSlipException::InvalidRecord { reason: message },
            _ => WorkSlipException::Remote {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl WorkSlipService for RemoteWorkSlipService {
    async fn list(&self) -> WorkSlipResult<Vec<WorkSlip>> {
        Ok(self.fetch_all().await.unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch slips: {e}");
            vec![]
        }))
    }

    async fn get(&self, id: &str) -> WorkSlipResult<Option<WorkSlip>> {
        Ok(self.fetch_one(id).await.unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch slip {id}: {e}");
            None
        }))
    }

    async fn create(&self, slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        let response = self
            .client
            .post(self.slips_url(None)?)
            .json(&slip)
            .send()
            .await
            .map_err(anyhow::Error::from)?;
        if !response.status().is_success() {
            return Err(self.failure(response, Some(&slip), &slip.id).await);
        }
        Ok(response.json().await.map_err(anyhow::Error::from)?)
    }

    async fn replace(&self, id: &str, slip: WorkSlip) -> WorkSlipResult<WorkSlip> {
        let request = self.client.put(self.slips_url(Some(id))?).json(&slip);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(anyhow::Error::from)?;
        if !response.status().is_success() {
            return Err(self.failure(response, Some(&slip), id).await);
        }
        Ok(response.json().await.map_err(anyhow::Error::from)?)
    }

    async fn delete(&self, id: &str) -> WorkSlipResult<()> {
        let response = self
            .client
            .delete(self.slips_url(Some(id))?)
            .send()
            .await
            .map_err(anyhow::Error::from)?;
        if !response.status().is_success() {
            return Err(self.failure(response, None, id).await);
        }
        Ok(())
    }
}
