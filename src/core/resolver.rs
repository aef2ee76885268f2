use crate::core::{BreedFetcher, BreedQuery, ConfigProvider, ServiceResponse, SubBreedList};
use crate::utils::error::{AppError, ResolutionError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api/breed";

/// Resolves sub-breeds with one GET to `<base>/<breed>/list`.
///
/// Every failure, whether transport, decoding or a server-reported `"error"`
/// status, comes back as the same [`ResolutionError`]. The HTTP status code is
/// not consulted; the body decides.
#[derive(Debug, Clone)]
pub struct BreedResolver {
    base_url: String,
    client: Client,
}

impl Default for BreedResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BreedResolver {
    pub fn new() -> Self {
        Self::with_client(DEFAULT_BASE_URL, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Self::builder().base_url(config.base_url());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_for(&self, breed: &BreedQuery) -> String {
        format!("{}/{}/list", self.base_url, breed.as_str())
    }

    pub async fn resolve_sub_breeds(
        &self,
        breed: &BreedQuery,
    ) -> std::result::Result<SubBreedList, ResolutionError> {
        let url = self.endpoint_for(breed);
        let not_found = || ResolutionError::new(breed.as_str());

        tracing::debug!("Requesting sub-breeds from: {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::debug!("Request for '{}' failed: {}", breed, e);
            not_found()
        })?;

        tracing::debug!("Service response status: {}", response.status());

        let body = response.text().await.map_err(|e| {
            tracing::debug!("Reading body for '{}' failed: {}", breed, e);
            not_found()
        })?;

        let payload: ServiceResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Body for '{}' is not a breed listing: {}", breed, e);
            not_found()
        })?;

        if payload.is_error() {
            tracing::debug!("Service reported an error for '{}'", breed);
            return Err(not_found());
        }

        let sub_breeds = payload.into_sub_breeds().ok_or_else(|| {
            tracing::debug!("Message for '{}' is not a list of sub-breeds", breed);
            not_found()
        })?;

        tracing::debug!("Resolved {} sub-breeds for '{}'", sub_breeds.len(), breed);
        Ok(sub_breeds)
    }
}

#[async_trait]
impl BreedFetcher for BreedResolver {
    async fn get_sub_breeds(
        &self,
        breed: &BreedQuery,
    ) -> std::result::Result<SubBreedList, ResolutionError> {
        self.resolve_sub_breeds(breed).await
    }
}

#[derive(Debug, Default)]
pub struct ResolverBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    client: Option<Client>,
}

impl ResolverBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Ignored when a prebuilt client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<BreedResolver> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_url("base_url", &base_url)?;

        let client = match self.client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    if timeout.is_zero() {
                        return Err(AppError::InvalidConfigValue {
                            field: "timeout".to_string(),
                            value: "0".to_string(),
                            reason: "Timeout must be greater than zero".to_string(),
                        });
                    }
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(BreedResolver::with_client(base_url, client))
    }
}
