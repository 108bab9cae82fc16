//! REST gateway over a mockapi-style collection endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::error::{GatewayError, Result};
use crate::http_client::HttpUtils;
use crate::traits::DomainGateway;
use crate::types::{CreateDomainRequest, Domain, UpdateDomainRequest};

/// Base URL of the hosted data service.
pub const DEFAULT_BASE_URL: &str = "https://6797aa2bc2c861de0c6d964c.mockapi.io/";

/// Collection path, relative to the base URL.
const COLLECTION: &str = "domain";

/// `DomainGateway` backed by plain JSON over HTTP.
///
/// | Operation | Method | Path |
/// |-----------|--------|------|
/// | list | `GET` | `domain` |
/// | create | `POST` | `domain` |
/// | update | `PUT` | `domain/{id}` |
/// | delete | `DELETE` | `domain/{id}` |
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    base_url: Url,
}

impl RestGateway {
    /// Gateway with the transport's default timeout behaviour.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Gateway whose requests give up after `timeout`, if one is given.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| GatewayError::NetworkError {
            detail: format!("Failed to create HTTP client: {e}"),
        })?;
        Self::with_client(base_url, client)
    }

    /// Gateway reusing an existing client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                detail: e.to_string(),
            })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.endpoint(path)?)
            .header(CONTENT_TYPE, "application/json"))
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let method_name = method.to_string();
        let mut request = self.request(method, path)?;
        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(|e| GatewayError::SerializationError {
                detail: e.to_string(),
            })?;
            request = request.body(json);
        }

        let (status, text) = HttpUtils::execute_request(request, &method_name, path).await?;
        let text = HttpUtils::ensure_success(status, text, path)?;
        HttpUtils::parse_json(&text)
    }
}

#[async_trait]
impl DomainGateway for RestGateway {
    async fn list_domains(&self) -> Result<Vec<Domain>> {
        self.send_json::<(), _>(Method::GET, COLLECTION, None).await
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<Domain> {
        self.send_json(Method::POST, COLLECTION, Some(req)).await
    }

    async fn update_domain(&self, id: &str, req: &UpdateDomainRequest) -> Result<Domain> {
        self.send_json(Method::PUT, &record_path(id), Some(req))
            .await
    }

    async fn delete_domain(&self, id: &str) -> Result<()> {
        let path = record_path(id);
        let request = self.request(Method::DELETE, &path)?;
        let (status, text) = HttpUtils::execute_request(request, "DELETE", &path).await?;
        HttpUtils::ensure_success(status, text, &path)?;
        Ok(())
    }
}

/// `domain/{id}` with the id percent-encoded as a single path segment.
fn record_path(id: &str) -> String {
    format!("{COLLECTION}/{}", urlencoding::encode(id))
}

/// Parse the base URL and make sure relative joins append to its path.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let invalid = |detail: String| GatewayError::InvalidUrl {
        url: raw.to_string(),
        detail,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_valid() {
        let gw = RestGateway::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(gw.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let gw = RestGateway::new("http://localhost:3000/api/v1").unwrap();
        assert_eq!(
            gw.endpoint(COLLECTION).unwrap().as_str(),
            "http://localhost:3000/api/v1/domain"
        );
    }

    #[test]
    fn record_endpoint_encodes_id() {
        let gw = RestGateway::new("http://localhost:3000/").unwrap();
        let url = gw.endpoint(&record_path("a b/c")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/domain/a%20b%2Fc");
    }

    #[test]
    fn plain_id_is_untouched() {
        assert_eq!(record_path("42"), "domain/42");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = RestGateway::new("ftp://example.com/").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidUrl { .. }), "{err:?}");
    }

    #[test]
    fn rejects_garbage() {
        let err = RestGateway::new("not a url").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidUrl { .. }), "{err:?}");
    }

    #[test]
    fn timeout_client_builds() {
        let gw =
            RestGateway::with_timeout(DEFAULT_BASE_URL, Some(Duration::from_secs(5))).unwrap();
        assert_eq!(gw.base_url().host_str(), Some("6797aa2bc2c861de0c6d964c.mockapi.io"));
    }

    #[tokio::test]
    async fn unreachable_store_is_a_transport_failure() {
        // port 9 (discard) on loopback is closed in test environments
        let gw = RestGateway::new("http://127.0.0.1:9/").unwrap();
        let err = gw.list_domains().await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
