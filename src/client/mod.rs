//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use url::Url;

use crate::domain::{
    ApiKey, BusinessDetail, BusinessId, LOCATION, QueryParams, SearchOptions, SearchResult, TERM,
    ToParameters, ValidationError,
};
use crate::transport::{
    DEFAULT_BASE_URL, Endpoint, TransportError, build_url, decode_business_detail_json_response,
    decode_search_json_response,
};

/// Status reported for transport failures that produced no HTTP response.
pub const SYNTHETIC_TRANSPORT_STATUS: u16 = 500;

/// Boxed future returned by [`HttpTransport`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and fully-read body of an HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
#[error("{source}")]
/// Failure reported by an [`HttpTransport`] when no usable response was obtained.
pub struct TransportFailure {
    /// Status code, if the failure happened after the status line was received.
    pub status: Option<u16>,
    #[source]
    pub source: Box<dyn StdError + Send + Sync>,
}

impl TransportFailure {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            status: None,
            source: source.into(),
        }
    }
}

/// HTTP capability used by [`YelpClient`]: one GET with headers, body read to the end.
///
/// Implementations must release the response body on every path, including errors.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a Url,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a Url,
        headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url.clone())
                .headers(headers.clone())
                .send()
                .await
                .map_err(|err| TransportFailure {
                    status: err.status().map(|status| status.as_u16()),
                    source: Box::new(err),
                })?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|err| TransportFailure {
                status: Some(status),
                source: Box::new(err),
            })?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`YelpClient`].
///
/// [`YelpError::status`] exposes the HTTP status where one is known.
pub enum YelpError {
    /// A required input was missing or malformed; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The business detail endpoint does not know this id.
    #[error("business not found: {id}")]
    NotFound { id: BusinessId, status: u16 },

    /// Any other non-200 response.
    #[error("unexpected HTTP status: {status}")]
    Remote {
        status: u16,
        reason: Option<&'static str>,
        body: Option<String>,
    },

    /// No HTTP response was obtained (DNS, TCP, TLS, timeout, cancellation).
    #[error("transport error: {source}")]
    Transport {
        status: u16,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The body was not JSON or did not match the expected record.
    #[error("decode error: {source}")]
    Decode {
        status: u16,
        #[source]
        source: TransportError,
    },

    /// The configured base URL is unusable.
    #[error("invalid base URL: {url}")]
    InvalidBaseUrl { url: String },
}

impl YelpError {
    /// HTTP status associated with the error. Transport failures without a response report
    /// [`SYNTHETIC_TRANSPORT_STATUS`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { status, .. }
            | Self::Remote { status, .. }
            | Self::Transport { status, .. }
            | Self::Decode { status, .. } => Some(*status),
            Self::Validation(_) | Self::InvalidBaseUrl { .. } => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`YelpClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or transport.
pub struct YelpClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl YelpClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the service root (`https://api.yelp.com/`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom [`HttpTransport`] is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom [`HttpTransport`] is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a caller-provided transport instead of the bundled `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`YelpClient`]. Performs no I/O.
    pub fn build(self) -> Result<YelpClient, YelpError> {
        let usable = Url::parse(&self.base_url).is_ok_and(|url| !url.cannot_be_a_base());
        if !usable {
            return Err(YelpError::InvalidBaseUrl { url: self.base_url });
        }

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder.build().map_err(|err| YelpError::Transport {
                    status: SYNTHETIC_TRANSPORT_STATUS,
                    source: Box::new(err),
                })?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(YelpClient {
            api_key: self.api_key,
            base_url: self.base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Yelp Fusion client.
///
/// Holds the API key and a transport; no other state. Every request is a single
/// authenticated GET against `https://api.yelp.com/v3/businesses/...`, with no retries.
pub struct YelpClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl YelpClient {
    /// Create a client using the default base URL and `reqwest` transport.
    ///
    /// For more customization, use [`YelpClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> YelpClientBuilder {
        YelpClientBuilder::new(api_key)
    }

    /// Search by term and free-text location.
    ///
    /// `term` may be empty. Errors:
    /// - [`YelpError::Validation`] when `location` is empty (nothing is sent),
    /// - [`YelpError::Remote`] for non-200 responses,
    /// - [`YelpError::Decode`] when the body is not a search result.
    pub async fn search_simple(
        &self,
        term: &str,
        location: &str,
    ) -> Result<SearchResult, YelpError> {
        if location.is_empty() {
            return Err(ValidationError::MissingRequired { field: LOCATION }.into());
        }

        let params = QueryParams::from([
            (TERM.to_owned(), term.to_owned()),
            (LOCATION.to_owned(), location.to_owned()),
        ]);
        self.search_with_params(&params).await
    }

    /// Search with full [`SearchOptions`].
    ///
    /// Validation errors from the options are returned unchanged before any request.
    pub async fn search(&self, options: &SearchOptions) -> Result<SearchResult, YelpError> {
        let params = options.to_parameters()?;
        self.search_with_params(&params).await
    }

    /// Fetch a single business with hours and claim status.
    ///
    /// The detail endpoint reports unknown ids with HTTP 400 (and historically 404); both
    /// map to [`YelpError::NotFound`]. Other non-200 statuses are [`YelpError::Remote`].
    pub async fn business(&self, id: &BusinessId) -> Result<BusinessDetail, YelpError> {
        let response = self
            .send(Endpoint::Business(id), &QueryParams::new())
            .await?;

        match response.status {
            200 => decode_business_detail_json_response(&response.body).map_err(|source| {
                YelpError::Decode {
                    status: response.status,
                    source,
                }
            }),
            400 | 404 => Err(YelpError::NotFound {
                id: id.clone(),
                status: response.status,
            }),
            _ => Err(remote_error(response)),
        }
    }

    async fn search_with_params(&self, params: &QueryParams) -> Result<SearchResult, YelpError> {
        let response = self.send(Endpoint::Search, params).await?;
        if response.status != 200 {
            return Err(remote_error(response));
        }
        decode_search_json_response(&response.body).map_err(|source| YelpError::Decode {
            status: response.status,
            source,
        })
    }

    async fn send(
        &self,
        endpoint: Endpoint<'_>,
        params: &QueryParams,
    ) -> Result<HttpResponse, YelpError> {
        let url = build_url(&self.base_url, endpoint, params).map_err(|_| {
            YelpError::InvalidBaseUrl {
                url: self.base_url.clone(),
            }
        })?;
        let headers = self.headers()?;

        tracing::debug!(
            path = %endpoint.path(),
            params = ?params.keys().collect::<Vec<_>>(),
            "dispatching Yelp request"
        );

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|failure| YelpError::Transport {
                status: failure.status.unwrap_or(SYNTHETIC_TRANSPORT_STATUS),
                source: failure.source,
            })?;

        tracing::debug!(
            path = %endpoint.path(),
            status = response.status,
            body_len = response.body.len(),
            "received Yelp response"
        );
        Ok(response)
    }

    fn headers(&self) -> Result<HeaderMap, ValidationError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.api_key.as_str()))
            .map_err(|_| ValidationError::InvalidHeaderValue {
                field: ApiKey::FIELD,
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

fn remote_error(response: HttpResponse) -> YelpError {
    let reason = reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|status| status.canonical_reason());
    let body = if response.body.trim().is_empty() {
        None
    } else {
        Some(response.body)
    };
    YelpError::Remote {
        status: response.status,
        reason,
        body,
    }
}
