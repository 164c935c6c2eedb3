use serde::{Deserialize, Serialize};

/// Raw record returned by the search service / 搜索服务返回的原始记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hit {
    pub title: String,
    pub description: String,
    pub path: String,
    /// Documentation entry type, e.g. "Class", "Protocol" / 文档条目类型
    #[serde(rename = "type")]
    pub entry_type: String,
    pub score: String,
}

/// Wire response of the search endpoint / 搜索接口的响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<Hit>,
    pub status: String,
}

/// One mapped documentation entry, immutable once constructed
/// 一条映射后的文档条目，构造后不再变更
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub description: String,
    pub path: String,
    pub entry_type: String,
    pub score: String,
}

impl From<Hit> for SearchResult {
    /// Field-for-field copy, no transformation / 逐字段拷贝，不做任何转换
    fn from(hit: Hit) -> Self {
        Self {
            title: hit.title,
            description: hit.description,
            path: hit.path,
            entry_type: hit.entry_type,
            score: hit.score,
        }
    }
}

/// Render-ready view state, replaced wholesale on every lifecycle event
/// 渲染层可直接消费的视图状态，每次生命周期事件整体替换
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub results: Vec<SearchResult>,
    pub is_loading: bool,
}

impl Default for SearchState {
    /// Initial state: nothing yet, first load pending / 初始状态：无结果，首次加载中
    fn default() -> Self {
        Self {
            results: Vec::new(),
            is_loading: true,
        }
    }
}
