//! Child data fetch abstract Trait

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::error::{FinderError, FinderResult};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Child data source Trait
///
/// Platform implementation:
/// - HTTP: [`HttpChildSource`] (reqwest, JSON)
/// - TUI demo: `FileChildSource` (JSON tree file)
#[async_trait]
pub trait ChildSource: Send + Sync {
    /// Fetch the child payload for one item URL
    ///
    /// # Arguments
    /// * `url` - request URL taken from the clicked item
    async fn fetch(&self, url: &str) -> FinderResult<Value>;
}

/// HTTP 子节点数据源
///
/// GET 请求、JSON 响应；相对地址基于 `base` 解析。
pub struct HttpChildSource {
    client: Client,
    base: Option<Url>,
}

impl HttpChildSource {
    /// 创建数据源
    pub fn new(base: Option<Url>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client, base }
    }

    /// 解析（可能是相对的）请求地址
    fn resolve(&self, url: &str) -> FinderResult<Url> {
        let resolved = match &self.base {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|e| FinderError::NetworkError(format!("invalid url {url}: {e}")))
    }
}

#[async_trait]
impl ChildSource for HttpChildSource {
    async fn fetch(&self, url: &str) -> FinderResult<Value> {
        let resolved = self.resolve(url)?;
        log::debug!("[HTTP] GET {resolved}");

        let response = self
            .client
            .get(resolved)
            .send()
            .await
            .map_err(|e| FinderError::NetworkError(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FinderError::NetworkError(format!("decoding {url} failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_relative_urls_against_base() {
        let base = Url::parse("http://127.0.0.1:8000/api/").ok();
        let source = HttpChildSource::new(base);

        let resolved = source.resolve("/x").map(|u| u.to_string());
        assert_eq!(resolved.ok().as_deref(), Some("http://127.0.0.1:8000/x"));
    }

    #[test]
    fn resolve_rejects_garbage_without_base() {
        let source = HttpChildSource::new(None);
        assert!(source.resolve("/x").is_err());
    }
}
