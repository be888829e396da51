//! HTTP GET primitive and the authenticated request descriptor handed to it.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;
use url::Url;

use crate::client::config::Config;
use crate::transport::Query;

/// Query parameters whose values never appear in logs or `Debug` output.
const SECRET_PARAMS: &[&str] = &["password"];

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error raised by an [`HttpTransport`] itself (connection, TLS, timeout).
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Clone)]
/// Fully built GET request: target URL plus headers, credentials included.
///
/// A fresh descriptor is built for every call, so nothing about one request
/// can leak into another.
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The target URL with secret query values replaced by `***`, for logging.
    pub fn redacted_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self
            .url
            .query_pairs()
            .any(|(name, _)| is_secret(&name))
        {
            return url;
        }

        let pairs = self
            .url
            .query_pairs()
            .map(|(name, value)| {
                let value = if is_secret(&name) {
                    "***".into()
                } else {
                    value
                };
                (name, value)
            })
            .collect::<Vec<_>>();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url
    }
}

fn is_secret(name: &str) -> bool {
    SECRET_PARAMS.contains(&name)
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "***")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect::<Vec<_>>();
        f.debug_struct("HttpRequest")
            .field("url", &self.redacted_url().as_str())
            .field("headers", &headers)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Completed HTTP exchange.
pub struct HttpResponse {
    pub status: u16,
    /// `None` when the body could not be read.
    pub body: Option<Vec<u8>>,
}

/// Pluggable HTTP GET primitive.
///
/// Implementations perform exactly one network round-trip per call and must
/// not retry. Timeouts and cancellation belong here, not in the client.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, request: &'a HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

/// Build the authenticated GET descriptor for `query` from `config`.
pub(crate) fn build_request(config: &Config, query: &Query) -> HttpRequest {
    let mut url = config.api_url().clone();
    // Config only accepts URLs that can be a base, so this always succeeds.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(query.path());
    }
    if !query.params().is_empty() {
        url.query_pairs_mut().extend_pairs(query.params());
    }

    let credentials = format!(
        "{}:{}",
        config.username().as_str(),
        config.password().as_str()
    );
    HttpRequest {
        url,
        headers: vec![
            ("Accept".to_owned(), "application/json".to_owned()),
            (
                "Authorization".to_owned(),
                format!("Basic {}", STANDARD.encode(credentials)),
            ),
        ],
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, request: &'a HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self.client.get(request.url.clone());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = match response.bytes().await {
                Ok(bytes) => Some(bytes.to_vec()),
                Err(err) if (200..=299).contains(&status) => return Err(err.into()),
                Err(err) => {
                    debug!(status, error = %err, "could not read error response body");
                    None
                }
            };
            Ok(HttpResponse { status, body })
        })
    }
}
