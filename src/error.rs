//! Search error taxonomy / 搜索错误分类
//!
//! Everything is caught at the controller boundary; the rendering layer only
//! ever sees `{ results, is_loading }`. 所有错误在控制器边界处理，不会传到渲染层。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Request superseded by a newer one; never user-facing
    /// 请求被更新的请求取代，不向用户展示
    #[error("request cancelled")]
    Cancelled,

    /// Non-2xx HTTP response / 非2xx响应
    #[error("{status_text}")]
    Request { status_text: String },

    /// Connection or body transfer failure / 连接或传输失败
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed response JSON / 响应体不是合法JSON
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
