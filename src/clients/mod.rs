/// External API clients module
use crate::cache::Fetcher;
use crate::config::ApiConfig;
use crate::domain::{Launch, Payload, Resource, ResourceKey, Rocket, Starlink};
use crate::errors::FetchError;
use crate::schema::{self, Validated};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("rust-spacex-dashboard/1.0")
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON; non-2xx is a failure
    pub async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// SpaceX API client
pub struct SpaceXClient {
    http_client: HttpClient,
    v4_url: String,
    v5_url: String,
}

impl SpaceXClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        Ok(Self {
            http_client: HttpClient::new(config.timeout)?,
            v4_url: config.v4_url.trim_end_matches('/').to_string(),
            v5_url: config.v5_url.trim_end_matches('/').to_string(),
        })
    }

    /// Absolute URL of an endpoint; launches live on v5, the rest on v4
    pub fn url_for(&self, key: &ResourceKey) -> String {
        let base = match key {
            ResourceKey::Launches
            | ResourceKey::UpcomingLaunches
            | ResourceKey::PastLaunches
            | ResourceKey::LatestLaunch
            | ResourceKey::NextLaunch
            | ResourceKey::Launch(_) => &self.v5_url,
            _ => &self.v4_url,
        };
        format!("{}/{}", base, key.path())
    }

    /// Fetch a single validated record
    pub async fn fetch_one<T: Validated>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let json = self.http_client.get_json(url).await?;
        Ok(schema::parse_one(json)?)
    }

    /// Fetch a validated collection
    pub async fn fetch_many<T: Validated>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        debug!("GET {}", url);
        let json = self.http_client.get_json(url).await?;
        Ok(schema::parse_many(json)?)
    }
}

impl Fetcher for SpaceXClient {
    fn key_url(&self, key: &ResourceKey) -> String {
        self.url_for(key)
    }

    async fn fetch(&self, key: &ResourceKey) -> Result<Resource, FetchError> {
        let url = self.url_for(key);
        let resource = match key {
            ResourceKey::Launches | ResourceKey::UpcomingLaunches | ResourceKey::PastLaunches => {
                Resource::Launches(self.fetch_many::<Launch>(&url).await?)
            }
            ResourceKey::LatestLaunch | ResourceKey::NextLaunch | ResourceKey::Launch(_) => {
                Resource::Launch(Box::new(self.fetch_one::<Launch>(&url).await?))
            }
            ResourceKey::Rockets => Resource::Rockets(self.fetch_many::<Rocket>(&url).await?),
            ResourceKey::Rocket(_) => Resource::Rocket(Box::new(self.fetch_one::<Rocket>(&url).await?)),
            ResourceKey::Payloads => Resource::Payloads(self.fetch_many::<Payload>(&url).await?),
            ResourceKey::Payload(_) => {
                Resource::Payload(Box::new(self.fetch_one::<Payload>(&url).await?))
            }
            ResourceKey::Starlinks => Resource::Starlinks(self.fetch_many::<Starlink>(&url).await?),
            ResourceKey::Starlink(_) => {
                Resource::Starlink(Box::new(self.fetch_one::<Starlink>(&url).await?))
            }
        };
        Ok(resource)
    }
}
