use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the UEX client.
#[derive(Error, Debug)]
pub enum Error {
    /// Client could not be built from the provided settings.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// The HTTP request could not be built or sent.
    #[error("Failed to send request for UEX resource `{resource}`: {source}")]
    RequestError {
        resource: String,
        #[source]
        source: reqwest::Error,
    },
    /// UEX answered with a status other than 200 OK.
    #[error("UEX resource `{resource}` responded with status {status}")]
    UpstreamStatus { resource: String, status: StatusCode },
    /// UEX answered 200 OK but the body was not the expected `{"data": [...]}` shape.
    #[error("Failed to decode UEX resource `{resource}`: {source}")]
    UpstreamDecode {
        resource: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Whether the failure came from UEX itself (bad status or undecodable body).
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Error::UpstreamStatus { .. } | Error::UpstreamDecode { .. }
        )
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("UEX API base URL is missing")]
    MissingBaseUrl,
    #[error("UEX API key is missing")]
    MissingApiKey,
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
