//! HTTP client for the inner service.
//!
//! # Responsibilities
//! - Hold one pooled `reqwest::Client` for all outbound calls
//! - Resolve host names through [`SystemResolver`] so lookup failures
//!   stay identifiable in the error chain
//! - Split failures into non-2xx responses (body captured) and transport
//!   errors

use std::error::Error as StdError;
use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::http::response::error_chain;
use crate::inner::RETRIEVE_DATA_PATH;
use crate::model::DataResponse;

/// A host name that could not be resolved to any address.
#[derive(Debug, Error)]
#[error("{host}: {source}")]
pub struct UnknownHost {
    pub host: String,
    #[source]
    pub source: std::io::Error,
}

/// Resolver backed by the operating system (`getaddrinfo` via Tokio).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Look `host` up, treating an empty answer as a failure.
    pub async fn lookup(host: &str) -> Result<Vec<SocketAddr>, UnknownHost> {
        let addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|source| UnknownHost {
                host: host.to_string(),
                source,
            })?
            .collect::<Vec<_>>();

        if addrs.is_empty() {
            return Err(UnknownHost {
                host: host.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses found"),
            });
        }
        Ok(addrs)
    }
}

impl Resolve for SystemResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let host = name.as_str().to_string();
        Box::pin(async move {
            match Self::lookup(&host).await {
                Ok(addrs) => {
                    let addrs: Addrs = Box::new(addrs.into_iter());
                    Ok(addrs)
                }
                Err(err) => Err(Box::new(err) as Box<dyn StdError + Send + Sync>),
            }
        })
    }
}

/// Failure of a call to the inner service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The inner service answered with a non-success status.
    #[error("{status} from GET {url}")]
    Status {
        status: StatusCode,
        url: Url,
        body: String,
    },

    /// The request could not be completed or its body not decoded.
    #[error("{}", error_chain(.0))]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    /// The unresolvable host, if name resolution is what failed.
    pub fn unknown_host(&self) -> Option<&UnknownHost> {
        let UpstreamError::Transport(err) = self else {
            return None;
        };
        let mut current: Option<&(dyn StdError + 'static)> = Some(err);
        while let Some(cause) = current {
            if let Some(host) = cause.downcast_ref::<UnknownHost>() {
                return Some(host);
            }
            current = cause.source();
        }
        None
    }

    /// Whether a connection to the inner service could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, UpstreamError::Transport(err) if err.is_connect())
    }
}

/// Error building an [`InnerClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("inner service URL is not configured")]
    MissingUrl,

    #[error("invalid inner service URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Client for the inner service's data endpoint.
#[derive(Debug, Clone)]
pub struct InnerClient {
    http: reqwest::Client,
    data_url: Url,
}

impl InnerClient {
    /// Create a client for the inner service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), RETRIEVE_DATA_PATH);
        let data_url = Url::parse(&joined).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .dns_resolver(Arc::new(SystemResolver))
            .no_proxy()
            .build()?;

        Ok(Self { http, data_url })
    }

    /// Full URL of the data endpoint.
    pub fn data_url(&self) -> &Url {
        &self.data_url
    }

    /// `GET /retrieveData` on the inner service.
    pub async fn retrieve_data(&self) -> Result<DataResponse, UpstreamError> {
        tracing::debug!(url = %self.data_url, "Calling inner service");

        let response = self.http.get(self.data_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(status = %status, "Inner service returned an error response");
            return Err(UpstreamError::Status {
                status,
                url: self.data_url.clone(),
                body,
            });
        }

        Ok(response.json::<DataResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_joins_base() {
        let client = InnerClient::new("http://localhost:8081/").unwrap();
        assert_eq!(client.data_url().as_str(), "http://localhost:8081/retrieveData");

        let client = InnerClient::new("http://inner/api").unwrap();
        assert_eq!(client.data_url().as_str(), "http://inner/api/retrieveData");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = InnerClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn test_status_error_display() {
        let err = UpstreamError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: Url::parse("http://inner:8081/retrieveData").unwrap(),
            body: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "500 Internal Server Error from GET http://inner:8081/retrieveData"
        );
        assert!(err.unknown_host().is_none());
        assert!(!err.is_connect());
    }

    #[tokio::test]
    async fn test_lookup_reports_unknown_host() {
        let err = SystemResolver::lookup("relay-demo.invalid").await.unwrap_err();
        assert_eq!(err.host, "relay-demo.invalid");
        assert!(err.to_string().starts_with("relay-demo.invalid: "));
    }

    #[tokio::test]
    async fn test_lookup_resolves_localhost() {
        let addrs = SystemResolver::lookup("localhost").await.unwrap();
        assert!(!addrs.is_empty());
    }
}
