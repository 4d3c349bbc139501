use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    endpoints::{commodity::CommodityEndpoints, universe::UniverseEndpoints},
    error::{ConfigError, Error},
    model::response::DataEnvelope,
};

static DEFAULT_USER_AGENT: &str = concat!("pulsepoint-uex/", env!("CARGO_PKG_VERSION"));

/// Authenticated client for the UEX catalogue API.
///
/// Cheap to clone, the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Client {
    /// Creates a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Commodity catalogue endpoints.
    pub fn commodities(&self) -> CommodityEndpoints<'_> {
        CommodityEndpoints::new(self)
    }

    /// Star system, planet, moon and space station endpoints.
    pub fn universe(&self) -> UniverseEndpoints<'_> {
        UniverseEndpoints::new(self)
    }

    /// Base URL requests are issued against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET {base_url}/{resource}` with the given query and unwraps the `data` array.
    ///
    /// # Errors
    /// - [`Error::RequestError`] if the request could not be sent
    /// - [`Error::UpstreamStatus`] if UEX responds with anything but 200 OK
    /// - [`Error::UpstreamDecode`] if the body is not a `{"data": [...]}` envelope of `T`
    pub async fn fetch<T>(&self, resource: &str, query: &[(&str, String)]) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, resource);

        tracing::debug!(resource, ?query, "Requesting UEX resource");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await
            .map_err(|source| Error::RequestError {
                resource: resource.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UpstreamStatus {
                resource: resource.to_string(),
                status,
            });
        }

        let envelope: DataEnvelope<T> =
            response
                .json()
                .await
                .map_err(|source| Error::UpstreamDecode {
                    resource: resource.to_string(),
                    source,
                })?;

        tracing::debug!(
            resource,
            count = envelope.data.len(),
            "Received UEX resource"
        );

        Ok(envelope.data)
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Builds the client.
    ///
    /// Fails with [`ConfigError`] when the base URL or API key is missing or blank.
    pub fn build(self) -> Result<Client, Error> {
        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let api_key = self
            .api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Client {
            http,
            base_url,
            api_key,
        })
    }
}
