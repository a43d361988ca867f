//! HTTP implementation of [`MaestroApi`] against the Maestro REST API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::{ClientError, ClientResult};
use crate::http_client::HttpUtils;
use crate::traits::MaestroApi;
use crate::types::{Consumer, ListPage, ResourceBundle, WireConsumer, WorkDetail, WorkSummary};
use crate::utils::log_sanitizer::mask_token;

/// Path prefix of every Maestro REST endpoint.
pub const API_PREFIX: &str = "/api/maestro/v1";

/// Default endpoint used when nothing else is configured.
pub const DEFAULT_HTTP_ENDPOINT: &str = "http://localhost:8000";

const PAGE_SIZE: u32 = 100;

/// Connection settings for [`HttpClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL, e.g. `https://maestro.example.com`.
    pub http_endpoint: String,
    /// Optional bearer token.
    pub token: Option<String>,
    /// Accept invalid TLS certificates.
    pub insecure: bool,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Retries for idempotent requests on transient failures.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_endpoint: DEFAULT_HTTP_ENDPOINT.to_string(),
            token: None,
            insecure: false,
            request_timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("http_endpoint", &self.http_endpoint)
            .field("token", &mask_token(self.token.as_deref()))
            .field("insecure", &self.insecure)
            .field("request_timeout", &self.request_timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Maestro REST client.
pub struct HttpClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    max_retries: u32,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &mask_token(self.token.as_deref()))
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Build a client; fails with a validation error on a malformed endpoint.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = config.http_endpoint.trim().trim_end_matches('/');
        if endpoint.is_empty() {
            return Err(ClientError::validation("HTTP endpoint must not be empty"));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ClientError::validation(format!(
                "HTTP endpoint must start with http:// or https://, got '{endpoint}'"
            )));
        }

        let http = Client::builder()
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| ClientError::Transport {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        log::debug!(
            "[maestro] client for {endpoint} (token {}, insecure={})",
            mask_token(config.token.as_deref()),
            config.insecure
        );

        Ok(Self {
            http,
            base_url: endpoint.to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
            max_retries: config.max_retries,
        })
    }

    /// Base URL with the trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    fn authorized(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    /// Send, classify the status and return the body.
    async fn send(
        &self,
        rb: RequestBuilder,
        method: &str,
        url: &str,
        target: (&str, &str),
        retries: u32,
    ) -> ClientResult<String> {
        let (status, body) =
            HttpUtils::execute_request_with_retry(self.authorized(rb), method, url, retries)
                .await?;
        HttpUtils::check_status(status, &body, target.0, target.1)?;
        Ok(body)
    }

    /// Collect every item of a paginated list endpoint.
    async fn list_all<T: DeserializeOwned>(
        &self,
        path: &str,
        search: Option<&str>,
        target: (&str, &str),
    ) -> ClientResult<Vec<T>> {
        let url = self.url(path);
        let mut items = Vec::new();
        let mut page = 1_u32;

        loop {
            let mut query = vec![
                ("page", page.to_string()),
                ("size", PAGE_SIZE.to_string()),
            ];
            if let Some(search) = search {
                query.push(("search", search.to_string()));
            }
            let rb = self.http.get(&url).query(&query);
            let body = self.send(rb, "GET", &url, target, self.max_retries).await?;
            let list: ListPage<T> = HttpUtils::parse_json(&body)?;

            let received = list.items.len();
            items.extend(list.items);
            if received == 0 || u64::try_from(items.len()).unwrap_or(u64::MAX) >= list.total {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl MaestroApi for HttpClient {
    async fn list_consumers(&self) -> ClientResult<Vec<Consumer>> {
        let consumers: Vec<WireConsumer> =
            self.list_all("/consumers", None, ("consumers", "*")).await?;
        Ok(consumers.into_iter().map(Consumer::from).collect())
    }

    async fn create_consumer(&self, name: &str) -> ClientResult<Consumer> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("consumer name must not be empty"));
        }
        let url = self.url("/consumers");
        let rb = self.http.post(&url).json(&json!({ "name": name }));
        // Creation is not idempotent, never retried.
        let body = self.send(rb, "POST", &url, ("consumer", name), 0).await?;
        let created: WireConsumer = HttpUtils::parse_json(&body)?;
        log::info!("[maestro] created consumer {name} ({})", created.id);
        Ok(created.into())
    }

    async fn delete_consumer(&self, id: &str) -> ClientResult<()> {
        let url = self.url(&format!("/consumers/{}", urlencoding::encode(id)));
        let rb = self.http.delete(&url);
        self.send(rb, "DELETE", &url, ("consumer", id), self.max_retries)
            .await?;
        log::info!("[maestro] deleted consumer {id}");
        Ok(())
    }

    async fn list_work(&self, consumer_name: &str) -> ClientResult<Vec<WorkSummary>> {
        let search = format!("consumer_name = '{}'", consumer_name.replace('\'', "''"));
        let bundles: Vec<ResourceBundle> = self
            .list_all("/resource-bundles", Some(&search), ("consumer", consumer_name))
            .await?;
        Ok(bundles
            .into_iter()
            .map(|b| b.into_summary(consumer_name))
            .collect())
    }

    async fn get_work_detail(&self, id: &str) -> ClientResult<WorkDetail> {
        let url = self.url(&format!("/resource-bundles/{}", urlencoding::encode(id)));
        let rb = self.http.get(&url);
        let body = self
            .send(rb, "GET", &url, ("work", id), self.max_retries)
            .await?;
        let raw: Value = HttpUtils::parse_json(&body)?;
        let bundle: ResourceBundle =
            serde_json::from_value(raw.clone()).map_err(|e| ClientError::Parse {
                detail: e.to_string(),
            })?;
        Ok(bundle.into_detail(raw))
    }

    async fn delete_work(&self, id: &str) -> ClientResult<()> {
        let url = self.url(&format!("/resource-bundles/{}", urlencoding::encode(id)));
        let rb = self.http.delete(&url);
        self.send(rb, "DELETE", &url, ("work", id), self.max_retries)
            .await?;
        log::info!("[maestro] deleted work {id}");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> ClientConfig {
        ClientConfig {
            http_endpoint: endpoint.to_string(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn rejects_blank_endpoint() {
        let err = HttpClient::new(&config("  ")).err().unwrap();
        assert!(matches!(err, ClientError::Validation { .. }));
    }

    #[test]
    fn rejects_endpoint_without_scheme() {
        let err = HttpClient::new(&config("maestro:8000")).err().unwrap();
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn trims_trailing_slash() {
        let client = HttpClient::new(&config("http://localhost:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/consumers"),
            "http://localhost:8000/api/maestro/v1/consumers"
        );
    }

    #[test]
    fn debug_masks_token() {
        let cfg = ClientConfig {
            token: Some("sha256~verysecretvalue".into()),
            ..ClientConfig::default()
        };
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("verysecret"));
        assert!(printed.contains("****alue"));
    }
}
