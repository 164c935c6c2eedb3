//! Search API client / 搜索接口客户端

use std::time::Duration;

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::models::{SearchResponse, SearchResult};

/// Default topic substituted for empty input in the query-string builder
/// 查询串构造时空输入使用的默认主题
pub const DEFAULT_TOPIC: &str = "@raycast/api";

/// Thin wrapper over a shared reqwest client / reqwest客户端的薄封装
pub struct SearchClient {
    client: Client,
    config: ApiConfig,
}

impl SearchClient {
    pub fn new(config: ApiConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one search request / 发起一次搜索请求
    ///
    /// The JSON body is always `{"q": <raw text>}`. A query-string parameter
    /// is also built (empty input replaced by [`DEFAULT_TOPIC`]) but never
    /// attached, so the substituted default never reaches the server; this
    /// matches the observed wire behavior of the live extension.
    /// 请求体始终携带原始文本；构造的查询串参数从未上送，与线上观测一致。
    ///
    /// Cancelling the token aborts the request promptly and yields
    /// [`SearchError::Cancelled`]. 取消令牌会立刻中止请求。
    pub async fn search(
        &self,
        text: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let _params = build_query_params(text);

        let request = self
            .client
            .post(&self.config.search_endpoint)
            .json(&serde_json::json!({ "q": text }))
            .send();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            response = request => response?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Request {
                status_text: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            });
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SearchError::Cancelled),
            body = response.text() => body?,
        };
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.hits.into_iter().map(SearchResult::from).collect())
    }
}

/// Build the query-string parameters the request never carries
/// 构造请求实际并未携带的查询串参数
pub fn build_query_params(text: &str) -> String {
    let topic = if text.is_empty() { DEFAULT_TOPIC } else { text };
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", topic)
        .finish()
}
